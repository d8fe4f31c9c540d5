//! Row query builder
//!
//! Builds the filter/order query parameters the row API understands:
//! `column=eq.value` filters and a comma-joined `order` parameter.

/// Query parameters for a row read
#[derive(Debug, Clone)]
pub struct RowQuery {
    params: Vec<(String, String)>,
    order: Vec<String>,
    limit: Option<u32>,
}

impl RowQuery {
    /// Select all columns
    pub fn select_all() -> Self {
        Self {
            params: vec![("select".into(), "*".into())],
            order: Vec::new(),
            limit: None,
        }
    }

    /// Equality filter on a column
    pub fn eq(mut self, column: &str, value: impl ToString) -> Self {
        self.params
            .push((column.to_string(), format!("eq.{}", value.to_string())));
        self
    }

    /// Ascending order on a column; repeated calls build a tie-break chain
    pub fn order_asc(mut self, column: &str) -> Self {
        self.order.push(format!("{column}.asc"));
        self
    }

    /// Descending order on a column
    pub fn order_desc(mut self, column: &str) -> Self {
        self.order.push(format!("{column}.desc"));
        self
    }

    /// Row limit
    pub fn limit(mut self, n: u32) -> Self {
        self.limit = Some(n);
        self
    }

    /// Final parameter list, ready for the request builder
    pub fn params(&self) -> Vec<(String, String)> {
        let mut out = self.params.clone();
        if !self.order.is_empty() {
            out.push(("order".into(), self.order.join(",")));
        }
        if let Some(n) = self.limit {
            out.push(("limit".into(), n.to_string()));
        }
        out
    }
}
