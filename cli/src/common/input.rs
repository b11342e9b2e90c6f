//! File input and output utilities.

use std::io::{Read, Write};

/// Read bytes from a file path or stdin if path is "-".
///
/// Returns the content and a display name for error messages.
pub fn read_bytes(path: &str) -> Result<(Vec<u8>, String), String> {
    if is_stdin(path) {
        let mut content = Vec::new();
        std::io::stdin()
            .read_to_end(&mut content)
            .map_err(|e| format!("<stdin>: {}", e))?;
        Ok((content, "<stdin>".to_string()))
    } else {
        let content = std::fs::read(path).map_err(|e| format!("{}: {}", path, e))?;
        Ok((content, path.to_string()))
    }
}

/// Read text from a file path or stdin if path is "-".
pub fn read_text(path: &str) -> Result<(String, String), String> {
    let (bytes, display_name) = read_bytes(path)?;
    let content =
        String::from_utf8(bytes).map_err(|e| format!("{}: {}", display_name, e))?;
    Ok((content, display_name))
}

/// Write bytes to a file path or stdout if path is "-".
pub fn write_bytes(path: &str, content: &[u8]) -> Result<(), String> {
    if is_stdin(path) {
        let mut stdout = std::io::stdout().lock();
        stdout
            .write_all(content)
            .and_then(|()| stdout.flush())
            .map_err(|e| format!("<stdout>: {}", e))
    } else {
        std::fs::write(path, content).map_err(|e| format!("{}: {}", path, e))
    }
}

/// Check if the path represents stdin (or stdout, for outputs).
pub fn is_stdin(path: &str) -> bool {
    path == "-"
}
