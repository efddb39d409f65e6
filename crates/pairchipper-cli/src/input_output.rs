use std::{
    fs::File,
    io::{BufRead, BufReader, BufWriter, Read, Write},
};

/// Maps `"-"` to `None`, meaning stdin / stdout.
fn squash_standard_io(path: &Option<String>) -> Option<String> {
    match path {
        Some(p) if p == "-" => None,
        Some(p) => Some(p.clone()),
        None => None,
    }
}

/// Open a reader for `path`; `None` or `"-"` reads stdin.
pub fn open_reader(path: &Option<String>) -> Result<Box<dyn BufRead>, Box<dyn std::error::Error>> {
    Ok(match squash_standard_io(path) {
        None => Box::new(BufReader::new(std::io::stdin().lock())),
        Some(p) => Box::new(BufReader::new(File::open(p)?)),
    })
}

/// Read all of `path` as UTF-8 text; `None` or `"-"` reads stdin.
pub fn read_text(path: &Option<String>) -> Result<String, Box<dyn std::error::Error>> {
    let mut text = String::new();
    open_reader(path)?.read_to_string(&mut text)?;
    Ok(text)
}

/// Input argument group.
#[derive(clap::Args, Debug)]
pub struct InputArgs {
    /// Optional input file; "-" may be used to indicate stdin.
    #[clap(long, default_value = None)]
    pub input: Option<String>,
}

impl InputArgs {
    /// Read all of the input as UTF-8 text.
    pub fn read_text(&self) -> Result<String, Box<dyn std::error::Error>> {
        read_text(&self.input)
    }
}

/// Output argument group.
#[derive(clap::Args, Debug)]
pub struct OutputArgs {
    /// Optional output file; "-" may be used to indicate stdout.
    #[clap(long, default_value = None)]
    pub output: Option<String>,
}

impl OutputArgs {
    /// Open a writer for the output.
    pub fn open_writer(&self) -> Result<Box<dyn Write>, Box<dyn std::error::Error>> {
        Ok(match squash_standard_io(&self.output) {
            Some(p) => Box::new(BufWriter::new(File::create(p)?)),
            None => Box::new(BufWriter::new(std::io::stdout().lock())),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_squash_standard_io() {
        assert_eq!(squash_standard_io(&None), None);
        assert_eq!(squash_standard_io(&Some("-".to_string())), None);
        assert_eq!(
            squash_standard_io(&Some("rules.json".to_string())),
            Some("rules.json".to_string())
        );
    }

    #[test]
    fn test_read_text_file() {
        let dir = tempdir::TempDir::new("pchipper").unwrap();
        let path = dir.path().join("corpus.txt");
        std::fs::write(&path, "hello\nworld\n").unwrap();

        let text = read_text(&Some(path.to_string_lossy().to_string())).unwrap();
        assert_eq!(text, "hello\nworld\n");
    }
}
