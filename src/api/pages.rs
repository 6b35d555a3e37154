use std::fmt::Write;

/// Renders the query form, optionally with a result list (recommended
/// titles or a single fallback message) below it.
pub fn index(results: Option<&[String]>) -> String {
    let mut body = String::from(
        "<!DOCTYPE html>\n\
         <html>\n\
         <head><title>Movie Recommendations</title></head>\n\
         <body>\n\
         <h1>Movie Recommendation System</h1>\n\
         <form action=\"/recommend\" method=\"post\">\n\
         <input type=\"text\" name=\"movie_name\" placeholder=\"Enter a movie title\" required>\n\
         <button type=\"submit\">Recommend</button>\n\
         </form>\n",
    );

    if let Some(results) = results {
        body.push_str("<ul>\n");
        for result in results {
            // write! to a String cannot fail
            let _ = writeln!(body, "<li>{}</li>", escape(result));
        }
        body.push_str("</ul>\n");
    }

    body.push_str("</body>\n</html>\n");
    body
}

/// Minimal HTML escaping for titles interpolated into the page.
fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_without_results_has_form_only() {
        let page = index(None);
        assert!(page.contains("movie_name"));
        assert!(!page.contains("<ul>"));
    }

    #[test]
    fn test_index_lists_results() {
        let results = vec!["Alien".to_string(), "Aliens".to_string()];
        let page = index(Some(&results));
        assert!(page.contains("<li>Alien</li>"));
        assert!(page.contains("<li>Aliens</li>"));
    }

    #[test]
    fn test_titles_are_escaped() {
        let results = vec!["<script>alert(1)</script>".to_string()];
        let page = index(Some(&results));
        assert!(!page.contains("<script>"));
        assert!(page.contains("&lt;script&gt;"));
    }
}
