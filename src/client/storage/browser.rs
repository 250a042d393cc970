use crate::client::{error::Error, storage::SessionStorage};

/// [`SessionStorage`] backed by `window.localStorage` and `document.cookie`.
///
/// Without the `web` feature there is no browser to talk to and every call returns
/// [`Error::StorageUnavailable`].
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

#[cfg(feature = "web")]
mod web {
    use wasm_bindgen::{JsCast, JsValue};
    use web_sys::{HtmlDocument, Storage};

    use crate::client::error::Error;

    fn js_error(err: JsValue) -> Error {
        Error::StorageError(format!("{:?}", err))
    }

    pub fn local_storage() -> Result<Storage, Error> {
        web_sys::window()
            .ok_or(Error::StorageUnavailable)?
            .local_storage()
            .map_err(js_error)?
            .ok_or(Error::StorageUnavailable)
    }

    pub fn html_document() -> Result<HtmlDocument, Error> {
        web_sys::window()
            .and_then(|window| window.document())
            .ok_or(Error::StorageUnavailable)?
            .dyn_into::<HtmlDocument>()
            .map_err(|_| Error::StorageUnavailable)
    }

    pub fn map_err<T>(result: Result<T, JsValue>) -> Result<T, Error> {
        result.map_err(js_error)
    }
}

#[cfg(feature = "web")]
impl SessionStorage for BrowserStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, Error> {
        web::map_err(web::local_storage()?.get_item(key))
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), Error> {
        web::map_err(web::local_storage()?.set_item(key, value))
    }

    fn remove_item(&self, key: &str) -> Result<(), Error> {
        web::map_err(web::local_storage()?.remove_item(key))
    }

    fn cookies(&self) -> Result<String, Error> {
        web::map_err(web::html_document()?.cookie())
    }

    fn set_cookie(&self, cookie: &str) -> Result<(), Error> {
        web::map_err(web::html_document()?.set_cookie(cookie))
    }
}

#[cfg(not(feature = "web"))]
impl SessionStorage for BrowserStorage {
    fn get_item(&self, _key: &str) -> Result<Option<String>, Error> {
        Err(Error::StorageUnavailable)
    }

    fn set_item(&self, _key: &str, _value: &str) -> Result<(), Error> {
        Err(Error::StorageUnavailable)
    }

    fn remove_item(&self, _key: &str) -> Result<(), Error> {
        Err(Error::StorageUnavailable)
    }

    fn cookies(&self) -> Result<String, Error> {
        Err(Error::StorageUnavailable)
    }

    fn set_cookie(&self, _cookie: &str) -> Result<(), Error> {
        Err(Error::StorageUnavailable)
    }
}
