//! Pagination parameters for list endpoints.

/// 1-based page selection with a clamped page size.
#[derive(Clone, Copy, Debug)]
pub struct Pagination {
    pub page: u32,
    pub per_page: u32,
}

impl Pagination {
    /// Convert to the 0-based page index and page size SeaORM paginators use.
    pub fn normalize(self) -> (u64, u64) {
        let page = self.page.max(1);
        let per_page = self.per_page.clamp(1, 100);
        ((page - 1) as u64, per_page as u64)
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self { page: 1, per_page: 20 }
    }
}

#[cfg(test)]
mod tests {
    use super::Pagination;

    #[test]
    fn zero_inputs_are_clamped() {
        let (idx, per) = Pagination { page: 0, per_page: 0 }.normalize();
        assert_eq!((idx, per), (0, 1));
    }

    #[test]
    fn per_page_has_an_upper_bound() {
        let (idx, per) = Pagination { page: 3, per_page: 1000 }.normalize();
        assert_eq!((idx, per), (2, 100));
    }

    #[test]
    fn defaults_are_sane() {
        let d = Pagination::default();
        assert_eq!((d.page, d.per_page), (1, 20));
    }
}
