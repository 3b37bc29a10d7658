mod common;

use common::run_tubenotes;

#[test]
fn summarize_subcommand_is_available() {
    let output = run_tubenotes(&["summarize", "--help"]);

    assert!(
        output.status.success(),
        "summarize --help should succeed\nstdout:\n{}\nstderr:\n{}",
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr)
    );

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("--words"));
    assert!(stdout.contains("--prompt"));
    assert!(stdout.contains("--backend"));
}

#[test]
fn summarize_rejects_invalid_url() {
    let output = run_tubenotes(&["summarize", "https://example.com/watch?v=dQw4w9WgXcQ"]);

    assert!(
        !output.status.success(),
        "summarize should fail for a non-YouTube link\nstdout:\n{}\nstderr:\n{}",
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr)
    );

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Invalid YouTube URL"),
        "expected invalid URL error, got:\n{}",
        stderr
    );
}

#[test]
fn summarize_rejects_link_with_leading_noise() {
    let output = run_tubenotes(&["summarize", "watch this https://youtu.be/dQw4w9WgXcQ"]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Invalid YouTube URL"));
}

#[test]
fn transcript_rejects_invalid_url() {
    let output = run_tubenotes(&["transcript", "not-a-url"]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Invalid YouTube URL"));
}
