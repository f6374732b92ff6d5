//! End-to-end scenarios from source text to edition record

use pitaval_parser::transforms::TransformError;
use pitaval_parser::{BodyNode, Edition, ParseError, SourceDocument, EDITORS};
use rstest::rstest;

fn build(stem: &str, text: &str) -> Edition<'static> {
    let source = SourceDocument::from_string(stem, text).expect("valid stem");
    Edition::build(&source, &EDITORS).expect("edition")
}

fn heading(text: &str) -> BodyNode {
    BodyNode::Heading {
        text: text.to_string(),
    }
}

fn paragraph(text: &str) -> BodyNode {
    BodyNode::Paragraph {
        text: text.to_string(),
    }
}

#[test]
fn short_document_from_volume_five() {
    let edition = build("Bd05_1845_02", "A short title.\n\nBody para one.\n");

    assert_eq!(edition.title, "A short title.");
    assert_eq!(
        edition.citation,
        "A short title. In: Der neue Pitaval, Bd. 5. Leipzig, 1845."
    );
    let editors: Vec<_> = edition.editors.iter().map(|e| e.surname).collect();
    assert_eq!(editors, vec!["Häring", "Hitzig"]);
    assert_eq!(
        edition.body,
        vec![heading("A short title."), paragraph("Body para one.")]
    );
}

#[test]
fn sole_multiline_block_in_volume_thirty_five_is_a_heading() {
    let edition = build("Bd35_1864_01", "Line one\nLine two");

    let editors: Vec<_> = edition.editors.iter().map(|e| e.surname).collect();
    assert_eq!(editors, vec!["Vollert"]);
    assert_eq!(edition.body, vec![heading("Line one Line two")]);
    assert_eq!(edition.title, "Line one Line two");
    assert_eq!(
        edition.citation,
        "Line one Line two. In: Der neue Pitaval, Bd. 35. Leipzig, 1864."
    );
}

#[rstest]
#[case::first_volume(1, &["Häring", "Hitzig"])]
#[case::last_founders_volume(30, &["Häring", "Hitzig"])]
#[case::first_vollert_volume(31, &["Vollert"])]
#[case::late_volume(58, &["Vollert"])]
fn editors_follow_the_volume(#[case] volume: u32, #[case] expected: &[&str]) {
    let stem = format!("Bd{:02}_1850_01", volume);
    let edition = build(&stem, "Titel.\n\nText.");
    let editors: Vec<_> = edition.editors.iter().map(|e| e.surname).collect();
    assert_eq!(editors, expected);
}

#[test]
fn page_furniture_and_verse_are_segmented() {
    let text = "Die Giftmischerin\r\n\
                Gesche Gottfried.\r\n\
                \r\n\
                \u{000C}Der neue Pitaval. 4\r\n\
                Sie wurde in Bremen geboren.\r\n\
                \r\n\
                \r\n\
                Schlaf, Kindlein, schlaf,\r\n\
                Der Vater hüt' die Schaf.\r\n\
                \r\n\
                Ende.   \r\n";
    let edition = build("Bd04_1843_07", text);

    assert_eq!(edition.title, "Die Giftmischerin Gesche Gottfried.");
    assert_eq!(
        edition.body,
        vec![
            heading("Die Giftmischerin Gesche Gottfried."),
            paragraph("Sie wurde in Bremen geboren."),
            BodyNode::VerseGroup {
                lines: vec![
                    "Schlaf, Kindlein, schlaf,".to_string(),
                    "Der Vater hüt' die Schaf.".to_string(),
                ]
            },
            paragraph("Ende."),
        ]
    );
}

#[test]
fn control_characters_in_the_text_are_rejected() {
    let source =
        SourceDocument::from_string("Bd05_1845_02", "Titel.\n\nA\u{0001}B und a\u{000C}b.\n")
            .unwrap();
    let err = Edition::build(&source, &EDITORS).unwrap_err();
    assert_eq!(
        err,
        ParseError::Transform(TransformError::ForbiddenCharacter {
            line: 3,
            character: '\u{0001}'
        })
    );
}

#[test]
fn edition_serializes_to_json() {
    let edition = build("Bd05_1845_02", "A short title.\n\nBody para one.\n");
    let json = serde_json::to_string_pretty(&edition).unwrap();

    insta::assert_snapshot!(json, @r###"
    {
      "stem": "Bd05_1845_02",
      "volume": 5,
      "year": 1845,
      "sequence": 2,
      "title": "A short title.",
      "citation": "A short title. In: Der neue Pitaval, Bd. 5. Leipzig, 1845.",
      "editors": [
        {
          "surname": "Häring",
          "forename": "Wilhelm",
          "gnd": "118501828"
        },
        {
          "surname": "Hitzig",
          "forename": "Julius Eduard",
          "gnd": "116887021"
        }
      ],
      "body": [
        {
          "kind": "heading",
          "text": "A short title."
        },
        {
          "kind": "paragraph",
          "text": "Body para one."
        }
      ]
    }
    "###);
}
