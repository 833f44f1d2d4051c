//! Light/dark mode shim. The real theme provider is an external collaborator;
//! this core only reads and toggles the `dark` class on the document root.

use web_sys::Document;

pub fn toggle(document: &Document) {
    if let Some(root) = document.document_element() {
        let _ = root.class_list().toggle("dark");
    }
}

pub fn is_dark(document: &Document) -> bool {
    document
        .document_element()
        .map(|root| root.class_list().contains("dark"))
        .unwrap_or(false)
}
