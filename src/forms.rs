// src/forms.rs
//
// Decoding of browser form submissions: urlencoded bodies/query strings and
// the multipart add-property form, plus the validation the admin forms run
// before anything is sent to the backend.

use std::collections::{BTreeMap, HashMap};

use url::form_urlencoded;

use crate::errors::ServerError;

pub const MAX_PROPERTY_IMAGES: usize = 10;

/// Decodes an `application/x-www-form-urlencoded` payload (or a URL query
/// string). Later duplicates win, which matches how the forms are built.
pub fn parse_urlencoded(raw: &[u8]) -> HashMap<String, String> {
    form_urlencoded::parse(raw)
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect()
}

/// One uploaded file part.
#[derive(Debug, Clone)]
pub struct UploadedFile {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

/// A decoded `multipart/form-data` body: text fields plus file parts keyed
/// by their field name.
#[derive(Debug, Default)]
pub struct MultipartForm {
    pub fields: HashMap<String, String>,
    pub files: Vec<(String, UploadedFile)>,
}

impl MultipartForm {
    pub fn field(&self, name: &str) -> &str {
        self.fields.get(name).map(String::as_str).unwrap_or("")
    }

    pub fn files_named(&self, name: &str) -> Vec<&UploadedFile> {
        self.files.iter().filter(|(n, _)| n == name).map(|(_, f)| f).collect()
    }
}

/// Extracts the boundary parameter from a multipart Content-Type header.
pub fn multipart_boundary(content_type: &str) -> Option<String> {
    if !content_type.to_ascii_lowercase().starts_with("multipart/form-data") {
        return None;
    }
    content_type.split(';').map(str::trim).find_map(|part| {
        let value = part.strip_prefix("boundary=")?;
        Some(value.trim_matches('"').to_string())
    })
}

fn find_from(haystack: &[u8], needle: &[u8], from: usize) -> Option<usize> {
    if from > haystack.len() || needle.is_empty() {
        return None;
    }
    haystack[from..]
        .windows(needle.len())
        .position(|w| w == needle)
        .map(|pos| pos + from)
}

fn disposition_param(header: &str, key: &str) -> Option<String> {
    let marker = format!("{key}=\"");
    let start = header.find(&marker)? + marker.len();
    let end = header[start..].find('"')? + start;
    Some(header[start..end].to_string())
}

/// Minimal `multipart/form-data` reader for browser submissions: walks the
/// boundary-delimited parts, splitting each into its headers and payload.
/// File parts with an empty filename (an untouched file input) are skipped.
pub fn parse_multipart(body: &[u8], boundary: &str) -> Result<MultipartForm, ServerError> {
    let delimiter = format!("--{boundary}").into_bytes();
    let mut form = MultipartForm::default();

    let mut pos = find_from(body, &delimiter, 0)
        .ok_or_else(|| ServerError::BadRequest("malformed multipart body".into()))?
        + delimiter.len();

    loop {
        // "--" after the delimiter closes the stream.
        if body[pos..].starts_with(b"--") {
            break;
        }
        if body[pos..].starts_with(b"\r\n") {
            pos += 2;
        }

        let header_end = find_from(body, b"\r\n\r\n", pos)
            .ok_or_else(|| ServerError::BadRequest("multipart part without headers".into()))?;
        let headers = String::from_utf8_lossy(&body[pos..header_end]);

        let mut name = None;
        let mut file_name = None;
        let mut content_type = None;
        for line in headers.lines() {
            let lower = line.to_ascii_lowercase();
            if lower.starts_with("content-disposition:") {
                name = disposition_param(line, "name");
                file_name = disposition_param(line, "filename");
            } else if let Some(value) = lower.strip_prefix("content-type:") {
                content_type = Some(value.trim().to_string());
            }
        }
        let name =
            name.ok_or_else(|| ServerError::BadRequest("multipart part without a name".into()))?;

        let content_start = header_end + 4;
        let next_delimiter = find_from(body, &delimiter, content_start)
            .ok_or_else(|| ServerError::BadRequest("unterminated multipart part".into()))?;
        // Strip the CRLF that precedes the next delimiter.
        let content_end = next_delimiter.saturating_sub(2).max(content_start);
        let content = &body[content_start..content_end];

        match file_name {
            Some(file_name) if !file_name.is_empty() => {
                form.files.push((
                    name,
                    UploadedFile {
                        file_name,
                        content_type: content_type
                            .unwrap_or_else(|| "application/octet-stream".into()),
                        bytes: content.to_vec(),
                    },
                ));
            }
            Some(_) => {} // empty file input, nothing chosen
            None => {
                form.fields.insert(name, String::from_utf8_lossy(content).into_owned());
            }
        }

        pos = next_delimiter + delimiter.len();
    }

    Ok(form)
}

/// The add-property form as submitted. Everything stays raw text until
/// validated; the backend owns the canonical parsing.
#[derive(Debug, Default)]
pub struct PropertyForm {
    pub title: String,
    pub category_id: String,
    pub location: String,
    pub price: String,
    pub roi: String,
    pub status: String,
    pub area: String,
    pub area_nepali: String,
    pub distance_from_highway: String,
    pub description: String,
    pub images: Vec<UploadedFile>,
}

impl PropertyForm {
    pub fn from_multipart(form: MultipartForm) -> Self {
        let images = form.files_named("images").into_iter().cloned().collect();
        Self {
            title: form.field("title").trim().to_string(),
            category_id: form.field("categoryId").trim().to_string(),
            location: form.field("location").trim().to_string(),
            price: form.field("price").trim().to_string(),
            roi: form.field("roi").trim().to_string(),
            status: form.field("status").trim().to_string(),
            area: form.field("area").trim().to_string(),
            area_nepali: form.field("areaNepali").trim().to_string(),
            distance_from_highway: form.field("distanceFromHighway").trim().to_string(),
            description: form.field("description").trim().to_string(),
            images,
        }
    }

    /// Per-field validation messages, keyed by the form field name. Runs
    /// entirely before any backend request.
    pub fn validate(&self) -> BTreeMap<&'static str, String> {
        let mut errors = BTreeMap::new();

        let require = |errors: &mut BTreeMap<&'static str, String>, key, value: &str, msg: &str| {
            if value.is_empty() {
                errors.insert(key, msg.to_string());
            }
        };

        require(&mut errors, "title", &self.title, "Title is required");
        require(&mut errors, "location", &self.location, "Location is required");
        require(&mut errors, "price", &self.price, "Price is required");
        require(&mut errors, "roi", &self.roi, "ROI is required");
        require(&mut errors, "status", &self.status, "Status is required");
        require(&mut errors, "area", &self.area, "Area is required");
        require(&mut errors, "description", &self.description, "Description is required");

        if self.category_id.is_empty() || self.category_id == "0" {
            errors.insert("categoryId", "Category is required".to_string());
        }

        if !self.distance_from_highway.is_empty() {
            match self.distance_from_highway.parse::<f64>() {
                Ok(d) if d < 0.0 => {
                    errors.insert(
                        "distanceFromHighway",
                        "Distance from highway cannot be negative".to_string(),
                    );
                }
                Ok(_) => {}
                Err(_) => {
                    errors.insert(
                        "distanceFromHighway",
                        "Distance from highway must be a number".to_string(),
                    );
                }
            }
        }

        if !self.area_nepali.is_empty() && !is_traditional_area(&self.area_nepali) {
            errors.insert(
                "areaNepali",
                "Use the ropani-aana-paisa-daam format, e.g. 0-11-2-0".to_string(),
            );
        }

        if self.images.len() > MAX_PROPERTY_IMAGES {
            errors.insert("images", format!("You can only upload up to {MAX_PROPERTY_IMAGES} images."));
        }

        errors
    }
}

/// Traditional-unit area string: four dash-separated numbers, the last one
/// optionally fractional (`\d+-\d+-\d+-\d+(\.\d+)?`).
fn is_traditional_area(value: &str) -> bool {
    let parts: Vec<&str> = value.split('-').collect();
    if parts.len() != 4 {
        return false;
    }
    let all_digits = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());
    if !parts[..3].iter().all(|p| all_digits(p)) {
        return false;
    }
    match parts[3].split_once('.') {
        Some((whole, frac)) => all_digits(whole) && all_digits(frac),
        None => all_digits(parts[3]),
    }
}
