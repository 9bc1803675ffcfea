use std::io::{self, BufRead, Write};

use pwd_policy::{Policy, evaluate_password_strength};
use secrecy::SecretString;

/// Removes one trailing `\n` and then one trailing `\r`, if present.
/// Any other character, including spaces, stays part of the password.
fn strip_line_terminator(line: &mut String) {
    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
}

fn main() -> io::Result<()> {
    let mut stdout = io::stdout();
    write!(stdout, "Input password: ")?;
    stdout.flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    strip_line_terminator(&mut line);
    let password = SecretString::new(line.into());

    #[cfg(feature = "async")]
    let evaluation = evaluate_password_strength(&password, &Policy::default(), None);

    #[cfg(not(feature = "async"))]
    let evaluation = evaluate_password_strength(&password, &Policy::default());

    writeln!(stdout, "{}", evaluation.verdict())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stripped(input: &str) -> String {
        let mut line = input.to_string();
        strip_line_terminator(&mut line);
        line
    }

    #[test]
    fn test_strip_newline() {
        assert_eq!(stripped("x\n"), "x");
    }

    #[test]
    fn test_strip_crlf() {
        assert_eq!(stripped("x\r\n"), "x");
    }

    #[test]
    fn test_strip_eof_without_newline() {
        assert_eq!(stripped("x"), "x");
        assert_eq!(stripped(""), "");
    }

    #[test]
    fn test_strip_keeps_extra_carriage_return() {
        assert_eq!(stripped("x\r\r\n"), "x\r");
    }

    #[test]
    fn test_strip_keeps_lone_carriage_return() {
        // No line feed means no terminator was read
        assert_eq!(stripped("x\r"), "x\r");
    }

    #[test]
    fn test_strip_keeps_spaces() {
        assert_eq!(stripped(" a b \n"), " a b ");
    }

    #[test]
    fn test_stripped_carriage_returns_still_count_as_run() {
        let line = stripped("aa\r\r\r\n");
        assert_eq!(line, "aa\r\r\r");
        assert_eq!(pwd_policy::repeated_runs(&line), 1);
    }
}
