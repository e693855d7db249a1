use std::io::{self, Write};

/// Writes one rendered body to stdout followed by a newline.
pub fn write_stdout_line(text: &str) -> io::Result<()> {
    let mut stdout = io::stdout().lock();
    emit(&mut stdout, text, true)
}

/// Writes pre-formatted text as-is; help screens carry their own
/// trailing newline.
pub fn write_stdout_text(text: &str) -> io::Result<()> {
    let mut stdout = io::stdout().lock();
    emit(&mut stdout, text, false)
}

/// A closed pipe (`caixa ... | head` quitting early) is an expected end
/// of output, not a failure; every other write or flush error surfaces.
fn emit(writer: &mut dyn Write, text: &str, newline: bool) -> io::Result<()> {
    match push(writer, text, newline) {
        Err(error) if error.kind() == io::ErrorKind::BrokenPipe => Ok(()),
        outcome => outcome,
    }
}

fn push(writer: &mut dyn Write, text: &str, newline: bool) -> io::Result<()> {
    writer.write_all(text.as_bytes())?;
    if newline {
        writer.write_all(b"\n")?;
    }
    writer.flush()
}

#[cfg(test)]
mod tests {
    use std::io::{self, Write};

    use super::emit;

    struct ClosedPipe;

    impl Write for ClosedPipe {
        fn write(&mut self, _: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }
    }

    struct FullDisk;

    impl Write for FullDisk {
        fn write(&mut self, _: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::StorageFull, "full"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn line_mode_appends_exactly_one_newline() {
        let mut sink = Vec::new();
        let written = emit(&mut sink, "Totals for `Matriz`", true);
        assert!(written.is_ok());
        assert_eq!(sink, b"Totals for `Matriz`\n");
    }

    #[test]
    fn text_mode_leaves_the_body_untouched() {
        let mut sink = Vec::new();
        let written = emit(&mut sink, "usage\n", false);
        assert!(written.is_ok());
        assert_eq!(sink, b"usage\n");
    }

    #[test]
    fn closed_pipe_is_not_an_error() {
        let written = emit(&mut ClosedPipe, "ignored", true);
        assert!(written.is_ok());
    }

    #[test]
    fn other_write_errors_still_surface() {
        let written = emit(&mut FullDisk, "kept", true);
        assert!(written.is_err());
    }
}
