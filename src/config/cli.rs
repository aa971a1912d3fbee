use crate::core::ReportSink;
use crate::utils::error::Result;
use std::io::Write;
use std::path::Path;

/// Writes each report as a file under a base directory.
#[derive(Debug, Clone)]
pub struct LocalSink {
    base_path: String,
}

impl LocalSink {
    pub fn new(base_path: String) -> Self {
        Self { base_path }
    }
}

impl ReportSink for LocalSink {
    fn write_report(&self, name: &str, data: &[u8]) -> Result<()> {
        let full_path = Path::new(&self.base_path).join(name);

        if let Some(parent) = full_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(full_path, data)?;
        Ok(())
    }

    fn describe(&self) -> String {
        self.base_path.clone()
    }
}

/// Streams reports straight to stdout, the default for interactive use.
#[derive(Debug, Clone, Default)]
pub struct StdoutSink;

impl StdoutSink {
    pub fn new() -> Self {
        Self
    }
}

impl ReportSink for StdoutSink {
    fn write_report(&self, _name: &str, data: &[u8]) -> Result<()> {
        let stdout = std::io::stdout();
        let mut handle = stdout.lock();
        handle.write_all(data)?;
        handle.flush()?;
        Ok(())
    }

    fn describe(&self) -> String {
        "stdout".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_local_sink_writes_under_base_path() {
        let temp_dir = TempDir::new().unwrap();
        let base = temp_dir.path().to_str().unwrap().to_string();
        let sink = LocalSink::new(base.clone());

        sink.write_report("prime_20.txt", b"2\n3\n").unwrap();

        let content = std::fs::read_to_string(temp_dir.path().join("prime_20.txt")).unwrap();
        assert_eq!(content, "2\n3\n");
        assert_eq!(sink.describe(), base);
    }

    #[test]
    fn test_local_sink_creates_missing_directories() {
        let temp_dir = TempDir::new().unwrap();
        let base = temp_dir
            .path()
            .join("nested")
            .join("reports")
            .to_str()
            .unwrap()
            .to_string();
        let sink = LocalSink::new(base);

        sink.write_report("odd_10.txt", b"1\n").unwrap();

        let written = temp_dir.path().join("nested").join("reports").join("odd_10.txt");
        assert!(written.exists());
    }
}
