use std::error::Error;
use std::fs;
use std::path::Path;

use crate::level::Level;
use crate::parser;
use crate::LoadLevel;

impl<P: AsRef<Path> + ?Sized> LoadLevel for P {
    fn load_level(&self) -> Result<Level, Box<dyn Error>> {
        let text = fs::read_to_string(self)?;
        let level = parser::parse(&text)?;
        Ok(level)
    }
}
