use crate::error::{Error, Result};

/// Check `requested` against `known`, falling back to every known target.
pub fn resolve(requested: &[String], known: &[String]) -> Result<Vec<String>> {
    if let Some(value) = requested.iter().find(|t| !known.contains(t)) {
        return Err(Error::InvalidValue {
            value: value.clone(),
            name: "target",
            flag: "-t",
        });
    }

    if requested.is_empty() {
        Ok(known.to_vec())
    } else {
        Ok(requested.to_vec())
    }
}
