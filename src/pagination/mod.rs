//! Pagination module
//!
//! List endpoints are paged with `page[number]` / `page[size]` query
//! parameters and describe the result set in `meta.pagination`.
//!
//! # Overview
//!
//! [`ListOptions`] selects a page, [`Page`] carries one page of decoded items
//! together with its [`Pagination`] block, and the pager helpers
//! ([`collect_all`], [`paginate`]) follow `next-page` until the last page.

mod pager;
mod types;

pub use pager::{collect_all, paginate};
pub use types::{ListOptions, NextPage, Page, Pagination};
