use super::{MediaQuery, PreferenceStore, RootClassList};
use crate::error::ThemeError;
use crate::utils::storage::{decode_bool, encode_bool, local_storage, window};

fn js_message(value: wasm_bindgen::JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}

/// `window.localStorage`, values stored as JSON booleans.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorage;

impl PreferenceStore for LocalStorage {
    fn get_item(&self, key: &str) -> Result<Option<bool>, ThemeError> {
        let raw = local_storage()?
            .get_item(key)
            .map_err(|e| ThemeError::Storage(js_message(e)))?;
        Ok(decode_bool(key, raw.as_deref()))
    }

    fn set_item(&self, key: &str, value: bool) -> Result<(), ThemeError> {
        local_storage()?
            .set_item(key, &encode_bool(value))
            .map_err(|e| ThemeError::Storage(js_message(e)))
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct WindowMediaQuery;

/// `matchMedia` wants the feature wrapped in parentheses.
fn normalize_query(query: &str) -> String {
    let query = query.trim();
    if query.starts_with('(') {
        query.to_string()
    } else {
        format!("({query})")
    }
}

impl MediaQuery for WindowMediaQuery {
    fn matches(&self, query: &str) -> Result<bool, ThemeError> {
        let list = window()?
            .match_media(&normalize_query(query))
            .map_err(|e| ThemeError::MediaQuery(js_message(e)))?
            .ok_or_else(|| ThemeError::MediaQuery(format!("{query} is not supported")))?;
        Ok(list.matches())
    }
}

/// `document.documentElement.classList`.
#[derive(Debug, Clone, Copy, Default)]
pub struct DocumentRoot;

impl DocumentRoot {
    fn html() -> Result<web_sys::Element, ThemeError> {
        window()?
            .document()
            .and_then(|doc| doc.document_element())
            .ok_or(ThemeError::NoDocumentElement)
    }
}

impl RootClassList for DocumentRoot {
    fn add(&self, token: &str) -> Result<(), ThemeError> {
        Self::html()?
            .class_list()
            .add_1(token)
            .map_err(|e| ThemeError::ClassList(js_message(e)))
    }

    fn remove(&self, token: &str) -> Result<(), ThemeError> {
        Self::html()?
            .class_list()
            .remove_1(token)
            .map_err(|e| ThemeError::ClassList(js_message(e)))
    }

    fn contains(&self, token: &str) -> bool {
        Self::html()
            .map(|html| html.class_list().contains(token))
            .unwrap_or(false)
    }
}
