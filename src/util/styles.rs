//! Shared presentational rules appended to `<head>` at start.

#[cfg(test)]
#[path = "styles_test.rs"]
mod styles_test;

/// Id of the injected `<style>` element; its presence marks the injection done.
pub const STYLE_ELEMENT_ID: &str = "bankcards-utility-styles";

pub const UTILITY_CSS: &str = r"
    .card {
        transition: transform 0.2s ease-in-out;
    }

    .card:hover {
        transform: translateY(-2px);
    }

    .btn {
        transition: all 0.2s ease-in-out;
    }

    .table th {
        background-color: #f8f9fa;
        font-weight: 600;
    }

    .alert {
        border-radius: 8px;
    }

    code {
        background-color: #f8f9fa;
        padding: 2px 4px;
        border-radius: 4px;
        font-family: 'Courier New', monospace;
    }

    .navbar-brand {
        font-weight: bold;
    }

    .modal-header {
        background-color: #f8f9fa;
        border-bottom: 1px solid #dee2e6;
    }

    .form-control:focus {
        border-color: #0d6efd;
        box-shadow: 0 0 0 0.2rem rgba(13, 110, 253, 0.25);
    }
";

/// Append the utility stylesheet to `<head>` unless it is already there.
///
/// Returns `true` when this call inserted it.
pub fn inject_styles() -> bool {
    #[cfg(feature = "csr")]
    {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return false;
        };
        if document.get_element_by_id(STYLE_ELEMENT_ID).is_some() {
            return false;
        }
        let (Some(head), Ok(style)) = (document.head(), document.create_element("style")) else {
            return false;
        };
        style.set_id(STYLE_ELEMENT_ID);
        style.set_text_content(Some(UTILITY_CSS));
        head.append_child(&style).is_ok()
    }
    #[cfg(not(feature = "csr"))]
    {
        false
    }
}
