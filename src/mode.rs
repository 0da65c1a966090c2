//! Operating mode of a contact, as a mode label with an optional submode.
//!
//! The set of modes lives outside this crate. Callers hand in a
//! [`SubmodeLookup`] describing which submodes each mode allows, and [`Mode`]
//! only checks that the pair it is given is consistent with it.

use std::{collections::HashMap, fmt::Display, hash::BuildHasher};

use crate::Error;

/// Source of the submodes allowed for each mode.
pub trait SubmodeLookup {
    /// Returns the submodes allowed for `mode`, or `None` if it has none.
    fn submodes_for(&self, mode: &str) -> Option<&[String]>;
}

impl<S: BuildHasher> SubmodeLookup for HashMap<String, Vec<String>, S> {
    fn submodes_for(&self, mode: &str) -> Option<&[String]> {
        self.get(mode)
            .map(Vec::as_slice)
            .filter(|submodes| !submodes.is_empty())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Mode {
    mode: String,
    submode: Option<String>,
}

impl Mode {
    /// Creates a mode, checking the submode against `lookup`. A mode that has
    /// submodes must be given one of them; a mode without submodes must not
    /// be given any.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidMode`] if the submode is missing, unexpected or
    /// not one of those allowed for the mode.
    ///
    /// # Usage
    ///
    /// ```
    /// use std::collections::HashMap;
    /// use qthloc::Mode;
    ///
    /// let lookup = HashMap::from([
    ///     ("SSB".to_string(), vec!["LSB".to_string(), "USB".to_string()]),
    /// ]);
    ///
    /// let mode = Mode::create("SSB", Some("LSB"), &lookup).unwrap();
    /// assert_eq!(mode.submode(), Some("LSB"));
    ///
    /// assert!(Mode::create("SSB", Some("ASCI"), &lookup).is_err());
    /// assert!(Mode::create("AM", None, &lookup).is_ok());
    /// ```
    pub fn create<L>(mode: &str, submode: Option<&str>, lookup: &L) -> Result<Mode, Error>
    where
        L: SubmodeLookup + ?Sized,
    {
        check_submode(mode, submode, lookup)?;

        Ok(Mode {
            mode: mode.to_string(),
            submode: submode.map(str::to_string),
        })
    }

    pub fn mode(&self) -> &str {
        &self.mode
    }

    pub fn submode(&self) -> Option<&str> {
        self.submode.as_deref()
    }

    /// Replaces the submode, leaving the mode untouched if it is not valid.
    ///
    /// # Errors
    ///
    /// Same as [`Mode::create`].
    pub fn set_submode<L>(&mut self, submode: Option<&str>, lookup: &L) -> Result<(), Error>
    where
        L: SubmodeLookup + ?Sized,
    {
        check_submode(&self.mode, submode, lookup)?;
        self.submode = submode.map(str::to_string);
        Ok(())
    }
}

fn check_submode<L>(mode: &str, submode: Option<&str>, lookup: &L) -> Result<(), Error>
where
    L: SubmodeLookup + ?Sized,
{
    match (lookup.submodes_for(mode), submode) {
        (Some(allowed), Some(sub)) if allowed.iter().any(|s| s == sub) => Ok(()),
        (Some(_), Some(sub)) => {
            Err(Error::InvalidMode(format!("Submode {sub} not valid for mode {mode}")))
        }
        (Some(_), None) => Err(Error::InvalidMode(format!("Mode {mode} requires a submode"))),
        (None, Some(sub)) => {
            Err(Error::InvalidMode(format!("Mode {mode} has no submodes, got {sub}")))
        }
        (None, None) => Ok(()),
    }
}

impl Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.submode {
            Some(submode) => write!(f, "{} ({submode})", self.mode),
            None => write!(f, "{}", self.mode),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lookup() -> HashMap<String, Vec<String>> {
        [
            ("SSB", vec!["LSB", "USB"]),
            ("RTTY", vec!["ASCI"]),
            ("AM", vec![]),
        ]
        .into_iter()
        .map(|(mode, subs)| (mode.to_string(), subs.into_iter().map(String::from).collect()))
        .collect()
    }

    #[test]
    fn different_modes_have_different_submodes() {
        let lookup = lookup();

        let first = |mode: &str| {
            lookup.submodes_for(mode).and_then(|s| s.first()).map(String::as_str)
        };

        assert_eq!(first("SSB"), Some("LSB"));
        assert_eq!(first("RTTY"), Some("ASCI"));
        assert!(lookup.submodes_for("AM").is_none());
    }

    #[test]
    fn rejects_submode_of_another_mode() {
        let err = Mode::create("SSB", Some("ASCI"), &lookup()).unwrap_err();
        assert!(matches!(err, Error::InvalidMode(_)));
    }

    #[test]
    fn requires_submode_when_mode_has_them() {
        assert!(matches!(Mode::create("RTTY", None, &lookup()), Err(Error::InvalidMode(_))));
    }

    #[test]
    fn rejects_submode_for_plain_mode() {
        assert!(matches!(Mode::create("AM", Some("LSB"), &lookup()), Err(Error::InvalidMode(_))));
    }

    #[test]
    fn set_submode_keeps_previous_on_error() {
        let lookup = lookup();
        let mut mode = Mode::create("SSB", Some("LSB"), &lookup).unwrap();

        mode.set_submode(Some("USB"), &lookup).unwrap();
        assert_eq!(mode.submode(), Some("USB"));

        assert!(mode.set_submode(Some("ASCI"), &lookup).is_err());
        assert_eq!(mode.submode(), Some("USB"));
        assert_eq!(mode.to_string(), "SSB (USB)");
    }
}
