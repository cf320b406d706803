use std::path::{Path, PathBuf};
use std::fs::File;
use std::io::{self, Write, Read};
use glob::glob;

/// read a file to a string after forcing its extension
pub fn read_to_string(filepath:&Path,extension:&str) -> io::Result<String> {
    let p = filepath.with_extension(extension);
    let mut f = File::open(&p)?;
    let mut s = String::new();
    f.read_to_string(&mut s)?;
    Ok(s)
}

/// write a string to a file after forcing its extension. Returns the path that was written
pub fn write_to_file(filepath:&Path,extension:&str,string:&str) -> io::Result<PathBuf> {
    let p = filepath.with_extension(extension);
    let mut f = File::create(&p)?;
    f.write_all(string.as_bytes())?;
    Ok(p)
}

pub fn vec_to_string<T>(vec:&[T],sep:&str) -> String
    where T:std::string::ToString {
    let vstr:Vec<String> = vec.iter().map(|num| num.to_string()).collect();
    return vstr.join(sep);
}

// single depth search
pub fn get_all_matches(dir:&Path,pattern:&str) -> Option<Vec<PathBuf>> {
    let pat = dir.join(pattern);
    let pat = pat.to_str()?;
    let mut matches:Vec<PathBuf> = glob(pat).ok()?.flat_map(|m| m).collect();
    matches.sort();
    match matches.is_empty() {
        true => None,
        false => Some(matches)
    }
}
