// src/gui/router.rs
use crate::config::options::PageKind;
use super::pages::{ self, Page };

pub static PAGES: &[&'static dyn Page] = &[
    &pages::agendas::PAGE,
    &pages::alerts::PAGE,
];

pub fn all_pages() -> &'static [&'static dyn Page] {
    PAGES
}

pub fn index_of(kind: PageKind) -> usize {
    PAGES.iter().position(|p| p.kind() == kind).unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_kind_routes_to_its_own_page() {
        for kind in [PageKind::Agendas, PageKind::Alerts] {
            assert_eq!(all_pages()[index_of(kind)].kind(), kind);
        }
    }
}
