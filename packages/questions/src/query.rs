// ABOUTME: Typed query builder for the question list endpoint
// ABOUTME: Turns optional filter/sort/page parameters into a parameterized SELECT

use serde::Deserialize;
use sqlx::{Postgres, QueryBuilder};

/// Fixed number of records per paginated list request
pub const PAGE_SIZE: i64 = 10;

/// Minimum page number (1-indexed)
pub const MIN_PAGE: i64 = 1;

/// Raw query-string parameters for `GET /questions`. Everything arrives as an
/// optional string so that malformed values degrade to "filter not applied"
/// instead of rejecting the request.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListParams {
    pub is_answered: Option<String>,
    pub tags: Option<String>,
    pub answers_count__gt: Option<String>,
    pub answers_count__lt: Option<String>,
    pub sort: Option<String>,
    pub page: Option<String>,
}

/// Sort orders recognized by the list endpoint; both sort descending
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SortKey {
    Score,
    CreatedAt,
}

/// Typed filter derived from [`ListParams`]
#[derive(Debug, Clone, Default)]
pub struct ListFilter {
    pub is_answered: Option<bool>,
    pub tags: Option<Vec<String>>,
    pub answers_gt: Option<i32>,
    pub answers_lt: Option<i32>,
    pub sort: Option<SortKey>,
    pub page: i64,
}

impl ListFilter {
    /// Parse raw query parameters into a typed filter.
    ///
    /// `page` falls back to 1 when absent, non-numeric, or below 1. The
    /// greater-than/less-than bounds are only applied when they parse as a
    /// positive integer. `is_answered` is true only for the literal `"true"`.
    pub fn from_params(params: &ListParams) -> Self {
        let is_answered = params.is_answered.as_deref().map(|raw| raw == "true");

        let tags = params
            .tags
            .as_deref()
            .filter(|raw| !raw.is_empty())
            .map(|raw| raw.split(',').map(str::to_string).collect());

        let answers_gt = parse_positive(params.answers_count__gt.as_deref());
        let answers_lt = parse_positive(params.answers_count__lt.as_deref());

        let sort = match params.sort.as_deref() {
            Some("score") => Some(SortKey::Score),
            Some("created_at") => Some(SortKey::CreatedAt),
            _ => None,
        };

        let page = params
            .page
            .as_deref()
            .and_then(|raw| raw.parse::<i64>().ok())
            .unwrap_or(MIN_PAGE)
            .max(MIN_PAGE);

        ListFilter {
            is_answered,
            tags,
            answers_gt,
            answers_lt,
            sort,
            page,
        }
    }

    /// SQL OFFSET for the requested page (0 for page 1). Saturates instead of
    /// overflowing for absurdly large page numbers.
    pub fn offset(&self) -> i64 {
        (self.page.max(MIN_PAGE) - 1).saturating_mul(PAGE_SIZE)
    }
}

fn parse_positive(raw: Option<&str>) -> Option<i32> {
    raw.and_then(|s| s.parse::<i32>().ok()).filter(|n| *n > 0)
}

/// Build the list SELECT statement. Predicates are appended in a fixed order
/// (is_answered, tags containment, answer_count bounds) with positional binds;
/// only the already-validated page-size and offset integers are interpolated.
pub fn build_list_query(filter: &ListFilter) -> QueryBuilder<'static, Postgres> {
    let mut query: QueryBuilder<Postgres> =
        QueryBuilder::new("SELECT * FROM questions WHERE true");

    if let Some(is_answered) = filter.is_answered {
        query.push(" AND is_answered = ");
        query.push_bind(is_answered);
    }

    if let Some(tags) = &filter.tags {
        query.push(" AND tags @> ");
        query.push_bind(tags.clone());
    }

    if let Some(gt) = filter.answers_gt {
        query.push(" AND answer_count > ");
        query.push_bind(gt);
    }

    if let Some(lt) = filter.answers_lt {
        query.push(" AND answer_count < ");
        query.push_bind(lt);
    }

    match filter.sort {
        Some(SortKey::Score) => {
            query.push(" ORDER BY score DESC");
        }
        Some(SortKey::CreatedAt) => {
            query.push(" ORDER BY created_at DESC");
        }
        None => {}
    }

    query.push(format!(" LIMIT {} OFFSET {}", PAGE_SIZE, filter.offset()));

    query
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn params_with_page(page: &str) -> ListParams {
        ListParams {
            page: Some(page.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_default_filter_has_page_one() {
        let filter = ListFilter::from_params(&ListParams::default());
        assert_eq!(filter.page, 1);
        assert_eq!(filter.offset(), 0);
    }

    #[test]
    fn test_offset_calculation() {
        let filter = ListFilter::from_params(&params_with_page("3"));
        assert_eq!(filter.offset(), 20);
    }

    #[test]
    fn test_invalid_page_falls_back_to_one() {
        for raw in ["abc", "", "-5", "0", "1.5"] {
            let filter = ListFilter::from_params(&params_with_page(raw));
            assert_eq!(filter.page, 1, "page {:?} should clamp to 1", raw);
            assert_eq!(filter.offset(), 0);
        }
    }

    #[test]
    fn test_huge_page_saturates_instead_of_overflowing() {
        let filter = ListFilter::from_params(&params_with_page("9223372036854775807"));
        assert_eq!(filter.page, i64::MAX);
        assert_eq!(filter.offset(), i64::MAX);

        let query = build_list_query(&filter);
        assert_eq!(
            query.sql(),
            format!("SELECT * FROM questions WHERE true LIMIT 10 OFFSET {}", i64::MAX)
        );
    }

    #[test]
    fn test_bare_query_has_no_predicates() {
        let filter = ListFilter::from_params(&ListParams::default());
        let query = build_list_query(&filter);
        assert_eq!(query.sql(), "SELECT * FROM questions WHERE true LIMIT 10 OFFSET 0");
    }

    #[test]
    fn test_predicates_appended_in_fixed_order() {
        let params = ListParams {
            is_answered: Some("true".to_string()),
            tags: Some("rust,sqlx".to_string()),
            answers_count__gt: Some("2".to_string()),
            answers_count__lt: Some("10".to_string()),
            sort: Some("score".to_string()),
            page: Some("2".to_string()),
        };
        let filter = ListFilter::from_params(&params);
        let query = build_list_query(&filter);
        assert_eq!(
            query.sql(),
            "SELECT * FROM questions WHERE true \
             AND is_answered = $1 \
             AND tags @> $2 \
             AND answer_count > $3 \
             AND answer_count < $4 \
             ORDER BY score DESC LIMIT 10 OFFSET 10"
        );
    }

    #[test]
    fn test_sort_by_created_at() {
        let params = ListParams {
            sort: Some("created_at".to_string()),
            ..Default::default()
        };
        let filter = ListFilter::from_params(&params);
        let query = build_list_query(&filter);
        assert_eq!(
            query.sql(),
            "SELECT * FROM questions WHERE true ORDER BY created_at DESC LIMIT 10 OFFSET 0"
        );
    }

    #[test]
    fn test_unknown_sort_is_ignored() {
        let params = ListParams {
            sort: Some("title".to_string()),
            ..Default::default()
        };
        let filter = ListFilter::from_params(&params);
        assert_eq!(filter.sort, None);
    }

    #[test]
    fn test_tags_split_on_commas() {
        let params = ListParams {
            tags: Some("a,b".to_string()),
            ..Default::default()
        };
        let filter = ListFilter::from_params(&params);
        assert_eq!(filter.tags, Some(vec!["a".to_string(), "b".to_string()]));
    }

    #[test]
    fn test_empty_tags_param_is_ignored() {
        let params = ListParams {
            tags: Some(String::new()),
            ..Default::default()
        };
        let filter = ListFilter::from_params(&params);
        assert_eq!(filter.tags, None);
    }

    #[test]
    fn test_is_answered_only_true_for_literal_true() {
        let params = ListParams {
            is_answered: Some("yes".to_string()),
            ..Default::default()
        };
        let filter = ListFilter::from_params(&params);
        assert_eq!(filter.is_answered, Some(false));
    }

    #[test]
    fn test_non_positive_count_bounds_are_dropped() {
        let params = ListParams {
            answers_count__gt: Some("0".to_string()),
            answers_count__lt: Some("-3".to_string()),
            ..Default::default()
        };
        let filter = ListFilter::from_params(&params);
        assert_eq!(filter.answers_gt, None);
        assert_eq!(filter.answers_lt, None);

        let query = build_list_query(&filter);
        assert_eq!(query.sql(), "SELECT * FROM questions WHERE true LIMIT 10 OFFSET 0");
    }
}
