use ariadne::Source;
use calc_attrs::ErrorKind;
use calc_error::{Error, ErrorKind};

#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("`{}` is not here", self.name),
    labels = ["this thing"],
    help = "try something else",
)]
struct Missing {
    name: String,
}

#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(message = "nothing to point at", labels = [""])]
struct Spanless;

/// Renders the report of the given error to a plain string, without color codes.
fn render(err: &Error, src: &str) -> String {
    let mut buf = Vec::new();
    err.build_report("input")
        .write(("input", Source::from(src)), &mut buf)
        .unwrap();
    String::from_utf8(strip_ansi_escapes::strip(buf)).unwrap()
}

#[test]
fn report_contains_message_label_and_help() {
    let err = Error::new(vec![4..5], Missing { name: "y".to_string() });
    let out = render(&err, "2 + y");
    assert!(out.contains("`y` is not here"));
    assert!(out.contains("this thing"));
    assert!(out.contains("try something else"));
}

#[test]
fn report_without_spans() {
    let err = Error::new(Vec::new(), Spanless);
    let out = render(&err, "1");
    assert!(out.contains("nothing to point at"));
}

#[test]
fn downcast_to_kind() {
    let err = Error::new(vec![0..1], Missing { name: "z".to_string() });
    assert!(err.is::<Missing>());
    assert!(!err.is::<Spanless>());
    assert_eq!(err.downcast_ref::<Missing>().unwrap().name, "z");
}
