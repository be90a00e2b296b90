//! Fixtures and helpers shared by the codec and settings contract tests
//!
//! Pages here mirror what the control panel renders; the helpers rebuild a
//! minimal page from a form submission so parser and serializer can be
//! checked against each other.

#![allow(dead_code)]

use ddnsnow_core::{RecordKind, Settings};

/// A record, a two-line TXT and a checked wildcard box
pub const REFERENCE_PAGE: &str = r#"<html>
<input type="text" id="update_data_a" value="127.0.0.1">
<textarea id="update_data_txt">record1
record2</textarea>
<input type="checkbox" id="update_data_wildcard" checked>
</html>"#;

/// Same state as the A/TXT part of [`REFERENCE_PAGE`], no wildcard
pub const A_AND_TXT_PAGE: &str = r#"<html><body><form>
<input type="text" id="update_data_a" value="127.0.0.1">
<textarea id="update_data_txt">record1
record2</textarea>
<input type="checkbox" id="update_data_wildcard">
</form></body></html>"#;

/// Every kind filled in, attributes in unusual order
pub const FULL_PAGE: &str = r#"<!DOCTYPE html>
<html><head><title>DDNS Now</title></head><body>
<form method="post" action="control.php">
<input value="192.0.2.10" id="update_data_a" type="text">
<input id="update_data_aaaa" value="2001:db8::10" type="text">
<input type="text" value="" id="update_data_cname">
<textarea rows="4" id="update_data_ns">ns1.example.net
ns2.example.net</textarea>
<textarea id="update_data_txt">v=spf1 include:_spf.example.net -all
google-site-verification=abc123</textarea>
<input checked type="checkbox" id="update_data_wildcard">
<input type="hidden" id="csrf" value="ignored">
</form>
</body></html>"#;

/// An account holding only a CNAME
pub const CNAME_PAGE: &str =
    r#"<html><input type="text" id="update_data_cname" value="target.example.com"></html>"#;

/// TXT and NS bodies with leading, inner and trailing blank lines
///
/// HTML drops the newline right after `<textarea>`, so the TXT body starts
/// with one blank line.
pub const BLANK_LINES_PAGE: &str = "<html>\n\
<textarea id=\"update_data_txt\">\n\nfirst\n\nsecond\n</textarea>\n\
<textarea id=\"update_data_ns\">ns1.example.net\n\n</textarea>\n\
</html>";

/// An account with nothing stored
pub const EMPTY_PAGE: &str = r#"<html>
<input type="text" id="update_data_a" value="">
<input type="text" id="update_data_aaaa" value="">
<input type="text" id="update_data_cname" value="">
<textarea id="update_data_ns"></textarea>
<textarea id="update_data_txt"></textarea>
<input type="checkbox" id="update_data_wildcard">
</html>"#;

pub fn parse(page: &str) -> Settings {
    Settings::from_html(page).expect("fixture page parses")
}

/// Rebuild a minimal control panel page from decoded form pairs
///
/// Textarea bodies get a leading newline the way servers render them, since
/// HTML strips one newline directly after the start tag.
pub fn page_from_pairs(pairs: &[(String, String)]) -> String {
    let mut page = String::from("<html><body><form>\n");
    for (key, value) in pairs {
        if key == "update_data_wildcard" {
            page.push_str(&format!("<input type=\"checkbox\" id=\"{}\" checked>\n", key));
            continue;
        }
        match RecordKind::from_form_id(key) {
            Some(kind) if kind.is_singleton() => page.push_str(&format!(
                "<input type=\"text\" id=\"{}\" value=\"{}\">\n",
                key,
                escape(value)
            )),
            Some(_) => page.push_str(&format!(
                "<textarea id=\"{}\">\n{}</textarea>\n",
                key,
                escape(value)
            )),
            None => {}
        }
    }
    page.push_str("</form></body></html>");
    page
}

/// Serialize, decode the body again and re-parse it as a page
pub fn round_trip(settings: &Settings) -> Settings {
    let encoded = ddnsnow_core::encode_fields(settings).expect("settings encode");
    let pairs: Vec<(String, String)> =
        serde_urlencoded::from_str(&encoded).expect("encoded body decodes");
    parse(&page_from_pairs(&pairs))
}

fn escape(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
