//! Host capabilities the seek handler needs from a DOM-like element tree.
//!
//! Implementations are expected to be cheap handles (the browser binding wraps
//! `web_sys` references), so every method takes `&self`.

/// A display element whose visible text can be replaced.
pub trait TextLabel {
    fn set_text(&self, text: &str);
}

/// The range input driving the seek bar.
pub trait SeekControl {
    /// Current position as the raw input string, a percentage in `[0, 100]`.
    fn value(&self) -> String;

    /// Raw attribute value, `None` if the attribute is absent.
    fn attribute(&self, name: &str) -> Option<String>;
}

/// Element lookup, split in two steps so the container is only searched for
/// once and labels are resolved relative to it.
pub trait ElementProvider {
    type Container;
    type Label: TextLabel;

    fn find_container(&self, selector: &str) -> Option<Self::Container>;

    fn find_label(&self, container: &Self::Container, selector: &str) -> Option<Self::Label>;
}
