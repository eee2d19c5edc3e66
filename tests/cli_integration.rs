//! Integration tests for the command-line interface.
//!
//! Each test spawns the binary on a file in a fresh temp directory and
//! checks the exit code, the console report, and the bytes on disk.

use std::fs;
use std::process::Command;
use tempfile::TempDir;

const SPACE_SAMPLE: &str = "/* Indentation with spaces */
void
gtk_text_buffer_insert_at_cursor (GtkTextBuffer *buffer,
                                  const gchar   *text,
                                  gint           len)
{
  GtkTextIter iter;

  g_return_if_fail (GTK_IS_TEXT_BUFFER (buffer));
  g_return_if_fail (text != NULL);

  gtk_text_buffer_get_iter_at_mark (buffer,
                                    &iter,
                                    gtk_text_buffer_get_insert (buffer));

  gtk_text_buffer_insert (buffer, &iter, text, len);
}
";

const SPACE_EXPECTED: &str = "/* Indentation with spaces */
void
gtk_text_buffer_insert_at_cursor (GtkTextBuffer *buffer,
                                  const gchar   *text,
                                  gint           len)
{
  GtkTextIter iter;

  g_return_if_fail (GTK_IS_TEXT_BUFFER (buffer));
  g_return_if_fail (text != NULL);

  tepl_buffer_get_iter_at_mark (buffer,
                                &iter,
                                gtk_text_buffer_get_insert (buffer));

  gtk_text_buffer_insert (buffer, &iter, text, len);
}
";

const TAB_SAMPLE: &str = "/* Indentation with tabs */
void
gtk_text_buffer_insert_at_cursor (GtkTextBuffer *buffer,
\t\t\t\t  const gchar   *text,
\t\t\t\t  gint           len)
{
\tGtkTextIter iter;

\tg_return_if_fail (GTK_IS_TEXT_BUFFER (buffer));
\tg_return_if_fail (text != NULL);

\tgtk_text_buffer_get_iter_at_mark (buffer,
\t\t\t\t\t  &iter,
\t\t\t\t\t  gtk_text_buffer_get_insert (buffer));

\tgtk_text_buffer_insert (buffer, &iter, text, len);
}
";

const TAB_EXPECTED: &str = "/* Indentation with tabs */
void
gtk_text_buffer_insert_at_cursor (GtkTextBuffer *buffer,
\t\t\t\t  const gchar   *text,
\t\t\t\t  gint           len)
{
\tGtkTextIter iter;

\tg_return_if_fail (GTK_IS_TEXT_BUFFER (buffer));
\tg_return_if_fail (text != NULL);

\ttepl_buffer_get_iter_at_mark (buffer,
\t\t\t\t      &iter,
\t\t\t\t      gtk_text_buffer_get_insert (buffer));

\tgtk_text_buffer_insert (buffer, &iter, text, len);
}
";

fn run_tool(args: &[&str]) -> std::process::Output {
    Command::new("cargo")
        .args(["run", "--quiet", "--"])
        .args(args)
        .output()
        .unwrap()
}

#[test]
fn test_help_describes_the_tool() {
    let output = run_tool(&["--help"]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("keeping parameter lists aligned"));
    assert!(stdout.contains("WARNING"));
}

#[test]
fn test_space_indented_sample() {
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("sample.c");
    fs::write(&file, SPACE_SAMPLE).unwrap();

    let output = run_tool(&[
        "gtk_text_buffer_get_iter_at_mark",
        "tepl_buffer_get_iter_at_mark",
        file.to_str().unwrap(),
    ]);

    assert!(output.status.success());
    assert_eq!(fs::read_to_string(&file).unwrap(), SPACE_EXPECTED);

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("1 occurrence(s) replaced"));
    assert!(stdout.contains("2 line(s) realigned"));
}

#[test]
fn test_tab_indented_sample() {
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("sample.c");
    fs::write(&file, TAB_SAMPLE).unwrap();

    let output = run_tool(&[
        "gtk_text_buffer_get_iter_at_mark",
        "tepl_buffer_get_iter_at_mark",
        file.to_str().unwrap(),
    ]);

    assert!(output.status.success());
    assert_eq!(fs::read_to_string(&file).unwrap(), TAB_EXPECTED);

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("1 occurrence(s) replaced"));
    assert!(stdout.contains("2 line(s) realigned"));
}

#[test]
fn test_no_occurrences_still_saves() {
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("main.c");
    fs::write(&file, "int main(void) { return 0; }\n").unwrap();

    let output = run_tool(&["absent_symbol", "replacement", file.to_str().unwrap()]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("No occurrence"));
    assert_eq!(
        fs::read_to_string(&file).unwrap(),
        "int main(void) { return 0; }\n"
    );
}

#[test]
fn test_empty_search_is_a_usage_error() {
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("input.c");
    fs::write(&file, "abc\n").unwrap();

    let output = run_tool(&["", "x", file.to_str().unwrap()]);

    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("must not be empty"));
    assert_eq!(fs::read_to_string(&file).unwrap(), "abc\n");
}

#[test]
fn test_wrong_argument_count() {
    let output = run_tool(&["just_one_arg"]);
    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn test_missing_file() {
    let output = run_tool(&["a", "b", "/nonexistent/path/file.c"]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("could not read"));
}

#[test]
fn test_misaligned_input_leaves_file_untouched() {
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("broken.c");
    let content = "foo (a,\n        over);\n";
    fs::write(&file, content).unwrap();

    let output = run_tool(&["foo", "much_longer_name", file.to_str().unwrap()]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("was left untouched"));
    assert_eq!(fs::read_to_string(&file).unwrap(), content);
}
