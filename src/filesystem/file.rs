use std::{fs, io::{Read, Write}};

/// Write data to path, creating or truncating the file
pub fn write_file_bytes(path: &str, data: &[u8]) -> Result<(), std::io::Error>
{
    let mut file = fs::File::create(path)?;
    file.write_all(data)
}

pub fn read_file_utf8(path: &str) -> Option<String>
{
    let mut file = match fs::File::open(path) {
        Err(why) =>
        {
            crate::debug(format!("error reading file to utf8, {}", why), None);
            return None
        },
        Ok(file) => file,
    };

    let mut s = String::new();
    match file.read_to_string(&mut s) {
        Err(why) =>
        {
            crate::debug(format!("error reading file to utf8, {}", why), None);
            None
        },
        Ok(_) => Some(s)
    }
}
