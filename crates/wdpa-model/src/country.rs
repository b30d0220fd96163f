use std::collections::BTreeSet;

/// Reference list of valid ISO 3166-1 alpha-3 country codes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CountryCodes {
    codes: BTreeSet<String>,
}

impl CountryCodes {
    pub fn contains(&self, code: &str) -> bool {
        self.codes.contains(code)
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.codes.iter().map(String::as_str)
    }
}

impl<S: AsRef<str>> FromIterator<S> for CountryCodes {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            codes: iter
                .into_iter()
                .map(|code| code.as_ref().trim().to_string())
                .filter(|code| !code.is_empty())
                .collect(),
        }
    }
}
