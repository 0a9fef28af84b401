//! Python bindings for the meta-descriptions Rust library.
//!
//! Exposes the plugin hooks under the names and signatures the
//! documentation build calls them with, so a thin `BasePlugin` subclass can
//! forward to [`PyMetaDescription`] unchanged.

use std::sync::Arc;

use pyo3::exceptions::{PyOSError, PyValueError};
use pyo3::prelude::*;
use pyo3::types::{PyDict, PyList};

use meta_descriptions::prelude::*;

/// Python wrapper for the meta description plugin.
#[pyclass(name = "MetaDescription")]
pub struct PyMetaDescription {
    inner: MetaDescriptionPlugin,
}

#[pymethods]
impl PyMetaDescription {
    /// Creates the plugin from its option mapping.
    #[new]
    #[pyo3(signature = (config=None))]
    fn new(config: Option<&Bound<'_, PyAny>>) -> PyResult<Self> {
        let options = match config {
            Some(obj) => py_to_json(obj)?,
            None => serde_json::Value::Null,
        };
        let config = PluginConfig::from_value(&options).map_err(to_py_err)?;

        Ok(Self {
            inner: MetaDescriptionPlugin::new(config)
                .with_event_sink(Arc::new(LoggingEventSink::debug())),
        })
    }

    /// Whether the CSV export is enabled.
    #[getter]
    fn export_csv(&self) -> bool {
        self.inner.config().export_csv
    }

    /// Number of rows buffered in the current build.
    #[getter]
    fn buffered(&self) -> usize {
        self.inner.buffer().len()
    }

    /// Starts a build.
    fn on_pre_build(&mut self, config: &Bound<'_, PyAny>) -> PyResult<()> {
        let build = build_config(config)?;
        self.inner.on_pre_build(&build);
        Ok(())
    }

    /// Sets `page.meta["description"]` when the page has none.
    #[pyo3(signature = (html, page, config, files=None))]
    fn on_page_content(
        &mut self,
        html: String,
        page: &Bound<'_, PyAny>,
        config: &Bound<'_, PyAny>,
        files: Option<&Bound<'_, PyAny>>,
    ) -> PyResult<String> {
        let _ = files;
        let build = build_config(config)?;
        let mut rs_page = page_from_py(page)?;
        let had_description = rs_page.has_description();

        let html = self.inner.on_page_content(html, &mut rs_page, &build);

        if !had_description {
            if let Some(description) = rs_page.description() {
                page.getattr("meta")?.set_item("description", description)?;
            }
        }
        Ok(html)
    }

    /// Buffers the page for export when enabled.
    fn on_post_page(
        &mut self,
        output: String,
        page: &Bound<'_, PyAny>,
        config: &Bound<'_, PyAny>,
    ) -> PyResult<String> {
        let build = build_config(config)?;
        let rs_page = page_from_py(page)?;
        Ok(self.inner.on_post_page(output, &rs_page, &build))
    }

    /// Writes the export when enabled and returns its path.
    fn on_post_build(&mut self, config: &Bound<'_, PyAny>) -> PyResult<Option<String>> {
        let build = build_config(config)?;
        let written = self.inner.on_post_build(&build).map_err(to_py_err)?;
        Ok(written.map(|path| path.display().to_string()))
    }

    fn __repr__(&self) -> String {
        format!("MetaDescription(export_csv={})", self.inner.config().export_csv)
    }
}

/// Extracts a meta description from rendered page content.
#[pyfunction]
fn extract_description(html: &str) -> String {
    meta_descriptions::extract_description(html)
}

/// Installs a stderr log subscriber; returns False if one already exists.
#[pyfunction]
#[pyo3(signature = (level="info"))]
fn init_logging(level: &str) -> bool {
    meta_descriptions::observability::init_logging(level)
}

// Helper functions

fn to_py_err(err: MetaDescriptionError) -> PyErr {
    if err.is_config() {
        PyValueError::new_err(err.to_string())
    } else {
        PyOSError::new_err(err.to_string())
    }
}

fn build_config(config: &Bound<'_, PyAny>) -> PyResult<BuildConfig> {
    let site_dir = optional_str(&config.get_item("site_dir")?)?;
    let site_url = match config.get_item("site_url") {
        Ok(value) => optional_str(&value)?,
        Err(_) => None,
    };

    let value = serde_json::json!({"site_dir": site_dir, "site_url": site_url});
    BuildConfig::from_value(&value).map_err(to_py_err)
}

fn page_from_py(page: &Bound<'_, PyAny>) -> PyResult<Page> {
    let mut rs_page = Page::new(page.getattr("url")?.str()?.to_string());
    rs_page.title = optional_attr(page, "title")?;
    rs_page.canonical_url = optional_attr(page, "canonical_url")?;

    let meta = page.getattr("meta")?;
    let description = meta.call_method1("get", ("description",))?;
    // Any truthy value counts as an author-supplied description.
    if description.is_truthy()? {
        rs_page.set_description(description.str()?.to_string());
    }
    Ok(rs_page)
}

fn optional_attr(obj: &Bound<'_, PyAny>, name: &str) -> PyResult<Option<String>> {
    if !obj.hasattr(name)? {
        return Ok(None);
    }
    optional_str(&obj.getattr(name)?)
}

fn optional_str(value: &Bound<'_, PyAny>) -> PyResult<Option<String>> {
    if value.is_none() {
        Ok(None)
    } else {
        Ok(Some(value.str()?.to_string()))
    }
}

fn py_to_json(obj: &Bound<'_, PyAny>) -> PyResult<serde_json::Value> {
    if obj.is_none() {
        return Ok(serde_json::Value::Null);
    }

    if let Ok(b) = obj.extract::<bool>() {
        return Ok(serde_json::Value::Bool(b));
    }

    if let Ok(i) = obj.extract::<i64>() {
        return Ok(serde_json::Value::Number(i.into()));
    }

    if let Ok(f) = obj.extract::<f64>() {
        if let Some(n) = serde_json::Number::from_f64(f) {
            return Ok(serde_json::Value::Number(n));
        }
    }

    if let Ok(s) = obj.extract::<String>() {
        return Ok(serde_json::Value::String(s));
    }

    if let Ok(list) = obj.downcast::<PyList>() {
        let mut arr = Vec::new();
        for item in list.iter() {
            arr.push(py_to_json(&item)?);
        }
        return Ok(serde_json::Value::Array(arr));
    }

    if let Ok(dict) = obj.downcast::<PyDict>() {
        let mut map = serde_json::Map::new();
        for (key, value) in dict.iter() {
            map.insert(key.str()?.to_string(), py_to_json(&value)?);
        }
        return Ok(serde_json::Value::Object(map));
    }

    // Host config objects behave like mappings without being dicts.
    if obj.hasattr("items")? {
        let mut map = serde_json::Map::new();
        for item in obj.call_method0("items")?.iter()? {
            let (key, value): (Bound<'_, PyAny>, Bound<'_, PyAny>) = item?.extract()?;
            map.insert(key.str()?.to_string(), py_to_json(&value)?);
        }
        return Ok(serde_json::Value::Object(map));
    }

    Ok(serde_json::Value::String(obj.str()?.to_string()))
}

/// The meta_descriptions Python module.
#[pymodule]
fn meta_descriptions_py(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyMetaDescription>()?;
    m.add_function(wrap_pyfunction!(extract_description, m)?)?;
    m.add_function(wrap_pyfunction!(crate::init_logging, m)?)?;

    m.add("FALLBACK_DESCRIPTION", FALLBACK_DESCRIPTION)?;
    m.add("MAX_DESCRIPTION_CHARS", MAX_DESCRIPTION_CHARS)?;
    m.add("__version__", env!("CARGO_PKG_VERSION"))?;

    Ok(())
}
