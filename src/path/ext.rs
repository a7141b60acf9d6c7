//! Filename extension splitting.

/// Split a filename into base name and extension (without the dot).
///
/// Short double extensions such as `tar.gz` are kept together. With
/// `ext_check`, an extension that is empty or contains whitespace is not
/// considered an extension and the whole filename is returned as base.
///
/// # Examples
/// ```
/// use ssg_util::path::magic_split_ext;
/// let split = |name| magic_split_ext(name, true);
/// assert_eq!(split("photo.jpg"), ("photo".into(), "jpg".into()));
/// assert_eq!(split("archive.tar.gz"), ("archive".into(), "tar.gz".into()));
/// assert_eq!(split(".htaccess"), (".htaccess".into(), String::new()));
/// assert_eq!(split("Mr. Smith"), ("Mr. Smith".into(), String::new()));
/// ```
pub fn magic_split_ext(filename: &str, ext_check: bool) -> (String, String) {
    let is_bad_ext =
        |ext: &str| ext_check && (ext.is_empty() || ext.chars().any(char::is_whitespace));

    let mut parts: Vec<&str> = filename.rsplitn(3, '.').collect();
    parts.reverse();

    match parts.as_slice() {
        [only] => return ((*only).to_string(), String::new()),
        ["", ext] => return (format!(".{ext}"), String::new()),
        [base, middle, last] if middle.chars().count() < 5 => {
            let ext = format!("{middle}.{last}");
            if !is_bad_ext(&ext) {
                return ((*base).to_string(), ext);
            }
        }
        _ => {}
    }

    let Some((ext, rest)) = parts.split_last() else {
        return (filename.to_string(), String::new());
    };
    if is_bad_ext(*ext) {
        return (filename.to_string(), String::new());
    }
    (rest.join("."), (*ext).to_string())
}
