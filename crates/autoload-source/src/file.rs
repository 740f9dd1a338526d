/// A class source file that has been loaded by a [`ModuleLoader`](crate::ModuleLoader).
///
/// # Fields
///
/// * `location` - The path the file was loaded from, exactly as the resolver built it
/// * `contents` - The raw text content of the file
///
/// # Example
///
/// ```
/// use autoload_source::SourceFile;
///
/// let file = SourceFile::new("includes/class-fees.php".to_string(), "<?php".to_string());
/// assert_eq!(file.location(), "includes/class-fees.php");
/// assert_eq!(file.contents(), "<?php");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    location: String,
    contents: String,
}

impl SourceFile {
    pub fn new(location: String, contents: String) -> Self {
        Self { location, contents }
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn contents(&self) -> &str {
        &self.contents
    }
}
