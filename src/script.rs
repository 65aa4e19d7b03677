//! Tampermonkey userscript that feeds `POST /api/location`.
//!
//! The script hooks `XMLHttpRequest.open` on geoguessr.com, watches two Google
//! Maps RPC endpoints, pulls the first `lat,lng` pair out of the response text
//! and posts it as JSON. The template is kept byte-for-byte; only the service
//! base URL is substituted.

const TEMPLATE: &str = include_str!("../assets/geowoot.user.js.tmpl");
const BASE_URL_PLACEHOLDER: &str = "${BASE_URL}";

/// Renders the userscript for a service reachable at `base_url`.
///
/// A trailing `/` on `base_url` is dropped so the posted URL has a single
/// slash before `api/location`.
pub fn render_userscript(base_url: &str) -> String {
    TEMPLATE.replace(BASE_URL_PLACEHOLDER, base_url.trim_end_matches('/'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_substitutes_base_url() {
        let script = render_userscript("https://geo.example.com");
        assert!(script.contains(r#"cleanFetch.fetch("https://geo.example.com/api/location", {"#));
        assert!(!script.contains(BASE_URL_PLACEHOLDER));
    }

    #[test]
    fn test_render_trims_trailing_slash() {
        let script = render_userscript("http://localhost:3000/");
        assert!(script.contains(r#""http://localhost:3000/api/location""#));
    }

    #[test]
    fn test_frozen_match_patterns() {
        let script = render_userscript("http://localhost:3000");
        assert!(script.starts_with("// ==UserScript==\n"));
        assert!(script.contains("// @match        https://www.geoguessr.com/*\n"));
        assert!(script.contains("// @grant        GM_webRequest\n"));
        assert!(script.contains(
            "url.startsWith('https://maps.googleapis.com/$rpc/google.internal.maps.mapsjs.v1.MapsJsInternalService/GetMetadata')"
        ));
        assert!(script.contains(
            "url.startsWith('https://maps.googleapis.com/$rpc/google.internal.maps.mapsjs.v1.MapsJsInternalService/SingleImageSearch')"
        ));
        assert!(script.ends_with("    close: () => frame.remove()\n};"));
    }

    #[test]
    fn test_frozen_coordinate_regex_and_body() {
        let script = render_userscript("http://localhost:3000");
        assert!(script.contains(r"const pattern = /-?\d+\.\d+,-?\d+\.\d+/g;"));
        assert!(script.contains(
            "        body: JSON.stringify({\n            \"lat\":lat,\n            \"lng\":lng\n        }),"
        ));
        assert!(script.contains(r#""Content-type": "application/json; charset=UTF-8""#));
    }
}
