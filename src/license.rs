//! Bundled license boilerplate.

use crate::error::{Error, Result};
use chrono::Datelike;

const YEAR_TOKEN: &str = "<year>";
const HOLDERS_TOKEN: &str = "<copyright holders>";

const MIT: &str = "MIT License

Copyright (c) <year> <copyright holders>

Permission is hereby granted, free of charge, to any person obtaining a copy of this software and associated documentation files (the \"Software\"), to deal in the Software without restriction, including without limitation the rights to use, copy, modify, merge, publish, distribute, sublicense, and/or sell copies of the Software, and to permit persons to whom the Software is furnished to do so, subject to the following conditions:

The above copyright notice and this permission notice shall be included in all copies or substantial portions of the Software.

THE SOFTWARE IS PROVIDED \"AS IS\", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.
";

const ISC: &str = "ISC License

Copyright (c) <year> <copyright holders>

Permission to use, copy, modify, and/or distribute this software for any purpose with or without fee is hereby granted, provided that the above copyright notice and this permission notice appear in all copies.

THE SOFTWARE IS PROVIDED \"AS IS\" AND THE AUTHOR DISCLAIMS ALL WARRANTIES WITH REGARD TO THIS SOFTWARE INCLUDING ALL IMPLIED WARRANTIES OF MERCHANTABILITY AND FITNESS. IN NO EVENT SHALL THE AUTHOR BE LIABLE FOR ANY SPECIAL, DIRECT, INDIRECT, OR CONSEQUENTIAL DAMAGES OR ANY DAMAGES WHATSOEVER RESULTING FROM LOSS OF USE, DATA OR PROFITS, WHETHER IN AN ACTION OF CONTRACT, NEGLIGENCE OR OTHER TORTIOUS ACTION, ARISING OUT OF OR IN CONNECTION WITH THE USE OR PERFORMANCE OF THIS SOFTWARE.
";

/// Returns the boilerplate for an SPDX license id, tokens still in place.
pub fn license_text(id: &str) -> Option<&'static str> {
    match id.to_ascii_uppercase().as_str() {
        "MIT" => Some(MIT),
        "ISC" => Some(ISC),
        _ => None,
    }
}

/// Fills in the year and copyright holders of a boilerplate text.
pub fn fill_license(text: &str, year: i32, holders: &str) -> String {
    text.replace(YEAR_TOKEN, &year.to_string()).replace(HOLDERS_TOKEN, holders)
}

/// License text for `id` with the current year and `holders` filled in.
pub fn render_license(id: &str, holders: &str) -> Result<String> {
    let text = license_text(id)
        .ok_or_else(|| Error::UnknownLicenseError { license: id.to_string() })?;
    Ok(fill_license(text, chrono::Local::now().year(), holders))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_license_lookup_is_case_insensitive() {
        assert!(license_text("mit").is_some());
        assert!(license_text("ISC").is_some());
        assert!(license_text("GPL-3.0").is_none());
    }

    #[test]
    fn test_fill_license_replaces_tokens() {
        let text = fill_license(MIT, 1843, "Ada Lovelace");
        assert!(text.contains("Copyright (c) 1843 Ada Lovelace"));
        assert!(!text.contains(YEAR_TOKEN));
        assert!(!text.contains(HOLDERS_TOKEN));
    }
}
