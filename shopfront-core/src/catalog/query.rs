//! Catalog query state
//!
//! One instance per catalog or override listing. Every setter except
//! `set_page` resets the page to 0 so a filter/sort/size change never leaves
//! the user stranded on a page that no longer exists.

/// Sort key for product listings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortField {
    #[default]
    Name,
    SpecialPrice,
    OriginalPrice,
}

impl SortField {
    /// Wire value for the `sortBy` query parameter
    pub fn as_str(&self) -> &'static str {
        match self {
            SortField::Name => "name",
            SortField::SpecialPrice => "specialPrice",
            SortField::OriginalPrice => "originalPrice",
        }
    }
}

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    /// Wire value for the `sortDir` query parameter
    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }

    fn toggled(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }
}

/// Pagination, sort and filter state for one listing
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogQuery {
    /// 0-based page index
    pub page: u32,
    pub page_size: u32,
    pub sort_by: SortField,
    pub sort_direction: SortDirection,
    pub category: Option<String>,
    pub brand: Option<String>,
}

impl CatalogQuery {
    /// Fresh query on page 0 with the listing's default page size
    pub fn new(page_size: u32) -> Self {
        Self {
            page: 0,
            page_size,
            sort_by: SortField::default(),
            sort_direction: SortDirection::default(),
            category: None,
            brand: None,
        }
    }

    /// Jump to a page; the only setter that touches nothing else
    pub fn set_page(&mut self, page: u32) {
        self.page = page;
    }

    pub fn set_page_size(&mut self, size: u32) {
        self.page_size = size;
        self.page = 0;
    }

    /// Select a sort field
    ///
    /// Selecting the current field again toggles the direction and keeps the
    /// field; a new field starts ascending.
    pub fn set_sort(&mut self, field: SortField) {
        if self.sort_by == field {
            self.sort_direction = self.sort_direction.toggled();
        } else {
            self.sort_by = field;
            self.sort_direction = SortDirection::Asc;
        }
        self.page = 0;
    }

    pub fn set_category(&mut self, category: Option<String>) {
        self.category = category;
        self.page = 0;
    }

    pub fn set_brand(&mut self, brand: Option<String>) {
        self.brand = brand;
        self.page = 0;
    }
}
