//! Text printed by `pitaval --man`

pub const MANUAL: &str = "\
NAME
    pitaval - convert \"Der neue Pitaval\" transcriptions to TEI-P5

SYNOPSIS
    pitaval --indir=<path> --outdir=<path> [--template=<path>] [--config=<path>]
            [--formatter=<name>] [--emit=<tei|json>] [-v...]
    pitaval --man | --help | --version

DESCRIPTION
    Reads every .txt file in the input directory and writes one TEI-P5 document per file
    to the output directory, which is created if needed. Files are processed one at a
    time in file-name order. The first error stops the run.

    Each input file holds one case narrative. Its name must start with
    Bd<volume>_<year>_<sequence>, for example Bd05_1845_02.txt. From the file the
    converter derives:

      title      the leading blocks up to and including the first one that ends with
                 a period, joined into one line
      citation   <title> In: Der neue Pitaval, Bd. <volume>. Leipzig, <year>.
      editors    Julius Eduard Hitzig and Wilhelm Häring up to volume 30,
                 Anton Vollert from volume 31 on
      body       the first block as the heading, every other block as a paragraph
                 or, when it spans several lines, as a line group

    Blocks are separated by blank lines. Lines starting with a form feed are dropped.

    The output file name is the input stem with every character other than letters,
    digits, '_' and '-' replaced by '_', cut to 100 characters.

OPTIONS
    --indir=<path>
        Directory with the source .txt files. Required.

    --outdir=<path>
        Directory for the output documents. Required.

    --template=<path>
        TEI template to populate. Defaults to template.path from the configuration,
        or the template built into the converter.

    --config=<path>
        TOML file layered over the built-in defaults.

    --formatter=<name>
        auto, xmllint or passthrough. auto uses xmllint when it is installed.

    --emit=<tei|json>
        Write TEI documents (default) or the derived edition records as JSON.

    -v, --verbose
        Report progress on stderr. Repeat for more detail. RUST_LOG overrides.

    --man
        Print this manual.

CONFIGURATION
    [input]      extension, sort
    [output]     emit, max_stem_len
    [formatter]  name, command, args, error_marker, dump_on_error
    [template]   path, and [template.targets] with the node paths that receive
                 main_title, volume, date, citation, editors, body and sequence

    Node paths are written like //title[@type=\"main\"] or //publicationStmt/date.

EXIT STATUS
    0 when every file was converted, 1 otherwise.
";
