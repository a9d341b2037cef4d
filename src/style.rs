use indexmap::IndexMap;

/// An ordered map of CSS property names to values.
///
/// This backs the `style` attribute of an element. Properties keep their
/// insertion order; setting an existing property overwrites its value in
/// place without changing its position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Style {
    properties: IndexMap<String, String>,
}

impl Style {
    /// Create an empty style map.
    pub fn new() -> Self {
        Style::default()
    }

    /// Parse semicolon-separated `name: value` declarations.
    ///
    /// Names and values are trimmed of surrounding whitespace. Segments
    /// without a colon or with an empty name are discarded.
    ///
    /// ```rust
    /// use hot::Style;
    ///
    /// let style = Style::parse("color: red; nonsense; margin: 0;");
    /// assert_eq!(style.get("color"), Some("red"));
    /// assert_eq!(style.get("margin"), Some("0"));
    /// assert_eq!(style.len(), 2);
    /// ```
    pub fn parse(text: &str) -> Style {
        let mut style = Style::new();
        for declaration in text.split(';') {
            if let Some((name, value)) = declaration.split_once(':') {
                let name = name.trim();
                if name.is_empty() {
                    continue;
                }
                style
                    .properties
                    .insert(name.to_string(), value.trim().to_string());
            }
        }
        style
    }

    /// Get a property value by name.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.properties.get(name).map(|value| value.as_str())
    }

    /// Set a property value.
    pub fn set<S: Into<String>>(&mut self, name: &str, value: S) {
        self.properties.insert(name.to_string(), value.into());
    }

    /// Remove a property. A no-op if the property is absent.
    pub fn remove(&mut self, name: &str) {
        self.properties.shift_remove(name);
    }

    /// Remove all properties.
    pub fn clear(&mut self) {
        self.properties.clear();
    }

    /// The number of properties.
    pub fn len(&self) -> usize {
        self.properties.len()
    }

    /// Whether the style map holds no properties.
    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    /// Iterate over the properties in order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.properties
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    /// Render the map as `name: value;` declarations joined by spaces.
    ///
    /// ```rust
    /// use hot::Style;
    ///
    /// let mut style = Style::new();
    /// style.set("color", "red");
    /// style.set("margin", "0");
    /// assert_eq!(style.to_css_string(), "color: red; margin: 0;");
    /// ```
    pub fn to_css_string(&self) -> String {
        let mut result = String::new();
        for (name, value) in &self.properties {
            if !result.is_empty() {
                result.push(' ');
            }
            result.push_str(name);
            result.push_str(": ");
            result.push_str(value);
            result.push(';');
        }
        result
    }
}
