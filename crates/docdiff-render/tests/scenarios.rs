//! End-to-end reports: YAML text in, rendered diff out.

use docdiff_diff::diff;
use docdiff_render::render_to_string;
use docdiff_types::{parse_document, Node};
use proptest::prelude::*;

fn report(old: &str, curr: &str) -> String {
    let old = parse_document(old).expect("old document parses");
    let curr = parse_document(curr).expect("current document parses");
    render_to_string(&diff(&old, &curr))
}

fn lines(rows: &[&str]) -> String {
    let mut out = rows.join("\n");
    out.push('\n');
    out
}

#[test]
fn add_a_map() {
    let old = "
Mary:
  Height:
    cm: 168";
    let curr = "
Mary:
  Height:
    cm: 168
  Weight:
    kg: 52";
    assert_eq!(
        report(old, curr),
        lines(&["~ Mary:", "    + Weight:", "    +     kg: 52"])
    );
}

#[test]
fn remove_a_map() {
    let old = "
Mary:
  Height:
    cm: 168
  Weight:
    kg: 52";
    let curr = "
Mary:
  Height:
    cm: 168";
    assert_eq!(
        report(old, curr),
        lines(&["~ Mary:", "    - Weight:", "    -     kg: 52"])
    );
}

#[test]
fn change_keyed_values() {
    let old = "
Mary:
  Height:
    cm: 190";
    let curr = "
Mary:
  Height:
    cm: 168";
    assert_eq!(
        report(old, curr),
        lines(&["~ Mary:", "    ~ Height:", "        ~ cm: 190 -> 168"])
    );
}

#[test]
fn list_does_not_change() {
    assert_eq!(report("Alphabet: [a,b,c,d]", "Alphabet: [a,b,c,d]"), "");
}

#[test]
fn list_with_insertion() {
    assert_eq!(
        report(
            "DanceCompetition: [dog,bear,cat]",
            "DanceCompetition: [dog,bear,mouse,cat]"
        ),
        lines(&[
            "~ DanceCompetition:",
            "    (2 unchanged items)",
            "    + - mouse",
            "    (1 unchanged item)",
        ])
    );
}

#[test]
fn list_with_deletion() {
    assert_eq!(
        report(
            "PotatoChipCommittee: [dog,bear,cat,mouse]",
            "PotatoChipCommittee: [dog,bear,mouse]"
        ),
        lines(&[
            "~ PotatoChipCommittee:",
            "    (2 unchanged items)",
            "    - - cat",
            "    (1 unchanged item)",
        ])
    );
}

#[test]
fn list_with_a_scalar_value_changed() {
    assert_eq!(
        report(
            "DogsFavoriteShape: [triangle,circle,rectangle]",
            "DogsFavoriteShape: [triangle,ellipse,rectangle]"
        ),
        lines(&[
            "~ DogsFavoriteShape:",
            "    (1 unchanged item)",
            "    ~ - circle -> ellipse",
            "    (1 unchanged item)",
        ])
    );
}

#[test]
fn list_with_insertion_deletion_and_change() {
    assert_eq!(
        report(
            "DogsFavoriteShape: [irregular,triangle,circle,rectangle]",
            "DogsFavoriteShape: [triangle,ellipse,rectangle,food-shape]"
        ),
        lines(&[
            "~ DogsFavoriteShape:",
            "    - - irregular",
            "    (1 unchanged item)",
            "    ~ - circle -> ellipse",
            "    (1 unchanged item)",
            "    + - food-shape",
        ])
    );
}

#[test]
fn list_reordered() {
    assert_eq!(
        report(
            "SizeRank: [bear,dog,cat,mouse]",
            "SizeRank: [bear,cat,dog,mouse]"
        ),
        lines(&[
            "~ SizeRank:",
            "    (1 unchanged item)",
            "    - - dog",
            "    (1 unchanged item)",
            "    + - dog",
            "    (1 unchanged item)",
        ])
    );
}

#[test]
fn list_with_a_map_value_changed() {
    let old = "StrawberryPopularitySurvey:
- Name: Dog
  LikeStrawberry: ver much
- Name: Bear
  LikeStrawberry: meh
  D:
     - One
     - Three:
          Wow: what
- Name: Cat
  LikeStrawberry: ew";
    let curr = "StrawberryPopularitySurvey:
- Name: Dog
  LikeStrawberry: ver much
- Name: Bear
  LikeStrawberry: ok
  Hey: wow
  D:
     - Two
     - Three:
         Wow: hey
- Name: Cat
  LikeStrawberry: ew";
    assert_eq!(
        report(old, curr),
        lines(&[
            "~ StrawberryPopularitySurvey:",
            "    (1 unchanged item)",
            "    - - Name: Bear",
            "    -   LikeStrawberry: meh",
            "    -   D:",
            "    -       - One",
            "    -       - Three:",
            "    -             Wow: what",
            "    + - Name: Bear",
            "    +   LikeStrawberry: ok",
            "    +   Hey: wow",
            "    +   D:",
            "    +       - Two",
            "    +       - Three:",
            "    +             Wow: hey",
            "    (1 unchanged item)",
        ])
    );
}

#[test]
fn list_scalar_replaced_by_a_map() {
    let old = "Items: [a, x]";
    let curr = "Items:\n  - a\n  - k: v";
    assert_eq!(
        report(old, curr),
        lines(&["~ Items:", "    (1 unchanged item)", "    - - x", "    + - k: v"])
    );
    assert_eq!(
        report(curr, old),
        lines(&["~ Items:", "    (1 unchanged item)", "    - - k: v", "    + - x"])
    );
}

#[test]
fn quoted_and_plain_values_differ() {
    assert_eq!(
        report("cm: 168", "cm: \"168\""),
        lines(&[r#"~ cm: 168 -> "168""#])
    );
}

#[test]
fn change_a_map_to_scalar() {
    let old = r#"
Mary:
  Dialogue:
    Bear: "I know I'm supposed to keep an eye on you""#;
    let curr = r#"
Mary:
  Dialogue: "Said bear: 'I know I'm supposed to keep an eye on you""#;
    assert_eq!(
        report(old, curr),
        lines(&[
            "~ Mary:",
            "    - Dialogue:",
            r#"    -     Bear: "I know I'm supposed to keep an eye on you""#,
            r#"    + Dialogue: "Said bear: 'I know I'm supposed to keep an eye on you""#,
        ])
    );
}

#[test]
fn change_a_list_to_scalar() {
    let old = r#"
Mary:
  Dialogue:
    - Bear: "I know I'm supposed to keep an eye on you"
      Tone: disappointed
    - Dog: "ikr"
      Tone: pleased"#;
    let curr = r#"
Mary:
  Dialogue: "Said bear: 'I know I'm supposed to keep an eye on you; Said Dog: 'ikr'""#;
    assert_eq!(
        report(old, curr),
        lines(&[
            "~ Mary:",
            "    - Dialogue:",
            r#"    -     - Bear: "I know I'm supposed to keep an eye on you""#,
            "    -       Tone: disappointed",
            r#"    -     - Dog: "ikr""#,
            "    -       Tone: pleased",
            r#"    + Dialogue: "Said bear: 'I know I'm supposed to keep an eye on you; Said Dog: 'ikr'""#,
        ])
    );
}

#[test]
fn change_a_map_to_list() {
    let old = r#"
Mary:
  Dialogue:
    Bear: (disappointed) "I know I'm supposed to keep an eye on you"
    Dog: (pleased) "ikr""#;
    let curr = r#"
Mary:
  Dialogue:
    - Bear: "I know I'm supposed to keep an eye on you"
      Tone: disappointed
    - Dog: "ikr"
      Tone: pleased"#;
    assert_eq!(
        report(old, curr),
        lines(&[
            "~ Mary:",
            "    - Dialogue:",
            r#"    -     Bear: (disappointed) "I know I'm supposed to keep an eye on you""#,
            r#"    -     Dog: (pleased) "ikr""#,
            "    + Dialogue:",
            r#"    +     - Bear: "I know I'm supposed to keep an eye on you""#,
            "    +       Tone: disappointed",
            r#"    +     - Dog: "ikr""#,
            "    +       Tone: pleased",
        ])
    );
}

#[test]
fn no_diff() {
    let doc = "
Mary:
  Height:
    cm: 190
  CanFight: yes
  FavoriteWord: muscle";
    assert_eq!(report(doc, doc), "");
}

#[test]
fn reordered_keys_no_diff() {
    assert_eq!(report("a: 1\nb: 2", "b: 2\na: 1"), "");
}

#[test]
fn json_documents() {
    assert_eq!(
        report(r#"{"port": 8080, "hosts": ["a"]}"#, r#"{"port": 9090, "hosts": ["a", "b"]}"#),
        lines(&[
            "~ port: 8080 -> 9090",
            "~ hosts:",
            "    (1 unchanged item)",
            r#"    + - "b""#,
        ])
    );
}

#[test]
fn blank_to_populated() {
    assert_eq!(
        report("", "Mary:\n  cm: 168"),
        lines(&["+ Mary:", "+     cm: 168"])
    );
}

fn arb_node() -> impl Strategy<Value = Node> {
    let leaf = "[a-z0-9]{1,4}".prop_map(Node::Scalar);
    leaf.prop_recursive(3, 32, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(Node::List),
            prop::collection::btree_map("[a-z]{1,3}", inner, 0..4)
                .prop_map(|m| Node::Mapping(m.into_iter().collect())),
        ]
    })
}

proptest! {
    #[test]
    fn identical_documents_render_empty(doc in arb_node()) {
        prop_assert_eq!(render_to_string(&diff(&doc, &doc)), "");
    }

    #[test]
    fn nonempty_reports_end_with_newline(old in arb_node(), curr in arb_node()) {
        let out = render_to_string(&diff(&old, &curr));
        prop_assert_eq!(out.is_empty(), old == curr);
        if !out.is_empty() {
            prop_assert!(out.ends_with('\n'));
            prop_assert!(!out.contains("\n\n"));
        }
    }
}
