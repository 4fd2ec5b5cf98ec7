// Copyright 2025 The Reporting Server Authors.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Offset/limit paging for list endpoints.

/// Page size applied when the request does not carry a `limit`.
pub const DEFAULT_PAGE_SIZE: usize = 50;

/// A resolved page window parsed from `startIndex`/`limit` query parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub start_index: usize,
    pub limit: usize,
}

impl PageRequest {
    pub fn new(start_index: Option<usize>, limit: Option<usize>) -> Self {
        Self {
            start_index: start_index.unwrap_or(0),
            limit: match limit {
                Some(0) | None => DEFAULT_PAGE_SIZE,
                Some(limit) => limit,
            },
        }
    }

    /// Slice one page out of the full result set. Returns the page and
    /// whether more results remain past it.
    pub fn slice<'a, T>(&self, items: &'a [T]) -> (&'a [T], bool) {
        if self.start_index >= items.len() {
            return (&[], false);
        }
        // Saturating so a huge limit cannot overflow past start_index
        let end = self.start_index.saturating_add(self.limit).min(items.len());
        (&items[self.start_index..end], end < items.len())
    }

    /// Start index of the page after this one.
    pub fn next_start_index(&self) -> usize {
        self.start_index.saturating_add(self.limit)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(None, None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let page = PageRequest::default();
        assert_eq!(page.start_index, 0);
        assert_eq!(page.limit, DEFAULT_PAGE_SIZE);
    }

    #[test]
    fn test_zero_limit_falls_back_to_default() {
        let page = PageRequest::new(None, Some(0));
        assert_eq!(page.limit, DEFAULT_PAGE_SIZE);
    }

    #[test]
    fn test_slice_first_page() {
        let items: Vec<u32> = (0..10).collect();
        let page = PageRequest::new(None, Some(4));
        let (slice, has_more) = page.slice(&items);
        assert_eq!(slice, &[0, 1, 2, 3]);
        assert!(has_more);
        assert_eq!(page.next_start_index(), 4);
    }

    #[test]
    fn test_slice_middle_page() {
        let items: Vec<u32> = (0..10).collect();
        let page = PageRequest::new(Some(4), Some(4));
        let (slice, has_more) = page.slice(&items);
        assert_eq!(slice, &[4, 5, 6, 7]);
        assert!(has_more);
    }

    #[test]
    fn test_slice_last_partial_page() {
        let items: Vec<u32> = (0..10).collect();
        let page = PageRequest::new(Some(8), Some(4));
        let (slice, has_more) = page.slice(&items);
        assert_eq!(slice, &[8, 9]);
        assert!(!has_more);
    }

    #[test]
    fn test_slice_with_max_limit_does_not_overflow() {
        let items: Vec<u32> = (0..3).collect();
        let page = PageRequest::new(Some(1), Some(usize::MAX));
        let (slice, has_more) = page.slice(&items);
        assert_eq!(slice, &[1, 2]);
        assert!(!has_more);
        assert_eq!(page.next_start_index(), usize::MAX);
    }

    #[test]
    fn test_slice_past_end_is_empty() {
        let items: Vec<u32> = (0..3).collect();
        let page = PageRequest::new(Some(10), None);
        let (slice, has_more) = page.slice(&items);
        assert!(slice.is_empty());
        assert!(!has_more);
    }
}
