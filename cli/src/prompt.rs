//! Interactive confirmation gating the destructive write phase.
//!
//! Single-state machine: from awaiting confirmation, `yes` proceeds, `no`
//! aborts, anything else shows another preview and asks again.

use std::io::{BufRead, Write};

/// Terminal states of the confirmation loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Proceeded,
    Aborted,
}

/// Run the confirmation loop on arbitrary reader/writer pairs.
///
/// `preview` is invoked once before the first prompt and again after every
/// unrecognized answer.
pub fn confirm_distribution<R, W, F>(
    input: &mut R,
    output: &mut W,
    mut preview: F,
) -> std::io::Result<Verdict>
where
    R: BufRead,
    W: Write,
    F: FnMut(&mut W) -> std::io::Result<()>,
{
    preview(output)?;
    loop {
        writeln!(
            output,
            "Enter \"yes\" to save all reports to the student folders."
        )?;
        writeln!(output, "Enter \"no\" to exit without writing anything.")?;
        writeln!(output, "Anything else shows another preview.")?;
        write!(output, "> ")?;
        output.flush()?;

        let mut answer = String::new();
        if input.read_line(&mut answer)? == 0 {
            // EOF counts as a cancel; never write without an explicit yes.
            return Ok(Verdict::Aborted);
        }
        match answer.trim().to_lowercase().as_str() {
            "yes" => return Ok(Verdict::Proceeded),
            "no" => return Ok(Verdict::Aborted),
            _ => preview(output)?,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run(script: &str) -> (Verdict, usize) {
        let mut input = Cursor::new(script.as_bytes().to_vec());
        let mut output: Vec<u8> = Vec::new();
        let mut previews = 0usize;
        let verdict = confirm_distribution(&mut input, &mut output, |_| {
            previews += 1;
            Ok(())
        })
        .unwrap();
        (verdict, previews)
    }

    #[test]
    fn yes_proceeds_after_one_preview() {
        assert_eq!(run("yes\n"), (Verdict::Proceeded, 1));
    }

    #[test]
    fn confirmation_is_case_insensitive() {
        assert_eq!(run(" YES \n"), (Verdict::Proceeded, 1));
    }

    #[test]
    fn no_aborts() {
        assert_eq!(run("no\n"), (Verdict::Aborted, 1));
    }

    #[test]
    fn unrecognized_input_previews_again() {
        assert_eq!(run("more\nhuh\nyes\n"), (Verdict::Proceeded, 3));
    }

    #[test]
    fn eof_aborts() {
        assert_eq!(run(""), (Verdict::Aborted, 1));
    }
}
