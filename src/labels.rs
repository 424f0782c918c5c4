use crate::config::SelectorConfig;
use crate::error::{LabelKind, SeekError};
use crate::provider::ElementProvider;

/// The seek-bar container together with its two labels.
pub struct LocatedSeekBar<C, L> {
    pub container: C,
    pub elapsed: L,
    pub remaining: L,
}

/// Lookup-once cache for the seek-bar labels.
///
/// Only a complete lookup is cached, so a failed call is retried on the next
/// event. Replacing the container in the page makes the cache stale; call
/// [`LabelCache::reset`] when that happens.
pub struct LabelCache<P: ElementProvider> {
    located: Option<LocatedSeekBar<P::Container, P::Label>>,
}

impl<P: ElementProvider> Default for LabelCache<P> {
    fn default() -> Self {
        Self { located: None }
    }
}

impl<P: ElementProvider> LabelCache<P> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_located(&self) -> bool {
        self.located.is_some()
    }

    pub fn reset(&mut self) {
        if self.located.take().is_some() {
            log::debug!("Seek bar label cache cleared");
        }
    }

    pub fn get_or_locate(
        &mut self,
        provider: &P,
        selectors: &SelectorConfig,
    ) -> Result<&LocatedSeekBar<P::Container, P::Label>, SeekError> {
        let located = match self.located.take() {
            Some(l) => l,
            None => locate(provider, selectors)?,
        };
        Ok(&*self.located.insert(located))
    }
}

fn locate<P: ElementProvider>(
    provider: &P,
    selectors: &SelectorConfig,
) -> Result<LocatedSeekBar<P::Container, P::Label>, SeekError> {
    let container = provider.find_container(&selectors.container).ok_or_else(|| {
        SeekError::ContainerNotFound {
            selector: selectors.container.clone(),
        }
    })?;
    let elapsed = find_label(provider, &container, LabelKind::Elapsed, &selectors.elapsed)?;
    let remaining = find_label(provider, &container, LabelKind::Remaining, &selectors.remaining)?;
    log::debug!("Located seek bar labels in {}", selectors.container);
    Ok(LocatedSeekBar {
        container,
        elapsed,
        remaining,
    })
}

fn find_label<P: ElementProvider>(
    provider: &P,
    container: &P::Container,
    label: LabelKind,
    selector: &str,
) -> Result<P::Label, SeekError> {
    provider
        .find_label(container, selector)
        .ok_or_else(|| SeekError::LabelNotFound {
            label,
            selector: selector.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::TextLabel;
    use std::cell::Cell;

    #[derive(Clone, Copy, Debug, PartialEq)]
    struct Tag(&'static str);

    impl TextLabel for Tag {
        fn set_text(&self, _text: &str) {}
    }

    struct Page {
        has_container: bool,
        labels: Vec<(&'static str, Tag)>,
        container_lookups: Cell<usize>,
    }

    impl Page {
        fn new(has_container: bool, labels: Vec<(&'static str, Tag)>) -> Self {
            Self {
                has_container,
                labels,
                container_lookups: Cell::new(0),
            }
        }
    }

    impl ElementProvider for Page {
        type Container = ();
        type Label = Tag;

        fn find_container(&self, _selector: &str) -> Option<()> {
            self.container_lookups.set(self.container_lookups.get() + 1);
            self.has_container.then_some(())
        }

        fn find_label(&self, _container: &(), selector: &str) -> Option<Tag> {
            self.labels
                .iter()
                .find(|(s, _)| *s == selector)
                .map(|(_, t)| *t)
        }
    }

    fn full_page() -> Page {
        Page::new(
            true,
            vec![
                ("span:first-child", Tag("before")),
                ("span:last-child", Tag("after")),
            ],
        )
    }

    #[test]
    fn locates_once() {
        let page = full_page();
        let selectors = SelectorConfig::default();
        let mut cache = LabelCache::new();

        let located = cache.get_or_locate(&page, &selectors).unwrap();
        assert_eq!(located.elapsed, Tag("before"));
        assert_eq!(located.remaining, Tag("after"));
        cache.get_or_locate(&page, &selectors).unwrap();
        cache.get_or_locate(&page, &selectors).unwrap();

        assert_eq!(page.container_lookups.get(), 1);
        assert!(cache.is_located());
    }

    #[test]
    fn missing_container() {
        let page = Page::new(false, vec![]);
        let mut cache = LabelCache::new();
        let err = cache
            .get_or_locate(&page, &SelectorConfig::default())
            .err()
            .unwrap();
        assert_eq!(
            err,
            SeekError::ContainerNotFound {
                selector: ".seek-bar".into()
            }
        );
        assert!(!cache.is_located());
    }

    #[test]
    fn missing_label_is_retried() {
        let page = Page::new(true, vec![("span:first-child", Tag("before"))]);
        let selectors = SelectorConfig::default();
        let mut cache = LabelCache::new();

        for _ in 0..2 {
            let err = cache.get_or_locate(&page, &selectors).err().unwrap();
            assert_eq!(
                err,
                SeekError::LabelNotFound {
                    label: LabelKind::Remaining,
                    selector: "span:last-child".into()
                }
            );
        }
        assert_eq!(page.container_lookups.get(), 2);
    }

    #[test]
    fn reset_forces_new_lookup() {
        let page = full_page();
        let selectors = SelectorConfig::default();
        let mut cache = LabelCache::new();
        cache.get_or_locate(&page, &selectors).unwrap();
        cache.reset();
        assert!(!cache.is_located());
        cache.get_or_locate(&page, &selectors).unwrap();
        assert_eq!(page.container_lookups.get(), 2);
    }
}
