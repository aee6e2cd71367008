use url::Url;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDir {
    Asc,
    Desc,
}

/// PostgREST query assembler. Filters become `column=op.value` pairs;
/// everything ends up as query parameters on the request URL.
#[derive(Debug, Clone, Default)]
pub struct Query {
    params: Vec<(String, String)>,
}

impl Query {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn select(mut self, columns: &str) -> Self {
        self.params.push(("select".to_string(), columns.to_string()));
        self
    }

    pub fn eq(mut self, column: &str, value: &str) -> Self {
        self.params.push((column.to_string(), format!("eq.{value}")));
        self
    }

    pub fn in_(mut self, column: &str, values: &[&str]) -> Self {
        self.params
            .push((column.to_string(), format!("in.({})", values.join(","))));
        self
    }

    /// Raw OR group, e.g. `or("status.eq.ABERTO,status.eq.EM_ANALISE")`.
    pub fn or(mut self, group: &str) -> Self {
        self.params.push(("or".to_string(), format!("({group})")));
        self
    }

    pub fn ilike(mut self, column: &str, pattern: &str) -> Self {
        self.params
            .push((column.to_string(), format!("ilike.{pattern}")));
        self
    }

    pub fn gte(mut self, column: &str, value: &str) -> Self {
        self.params
            .push((column.to_string(), format!("gte.{value}")));
        self
    }

    pub fn lte(mut self, column: &str, value: &str) -> Self {
        self.params
            .push((column.to_string(), format!("lte.{value}")));
        self
    }

    pub fn is_null(mut self, column: &str) -> Self {
        self.params.push((column.to_string(), "is.null".to_string()));
        self
    }

    pub fn order(mut self, column: &str, dir: SortDir) -> Self {
        let dir = match dir {
            SortDir::Asc => "asc",
            SortDir::Desc => "desc",
        };
        self.params
            .push(("order".to_string(), format!("{column}.{dir}")));
        self
    }

    /// Offset pagination over an inclusive row window.
    pub fn range(mut self, from: u32, to: u32) -> Self {
        self.params.push(("offset".to_string(), from.to_string()));
        self.params
            .push(("limit".to_string(), (to - from + 1).to_string()));
        self
    }

    pub fn limit(mut self, count: u32) -> Self {
        self.params.push(("limit".to_string(), count.to_string()));
        self
    }

    /// At most one row; callers pop the first element of the response.
    pub fn single(self) -> Self {
        self.limit(1)
    }

    pub fn apply(&self, url: &mut Url) {
        let mut pairs = url.query_pairs_mut();
        for (key, value) in &self.params {
            pairs.append_pair(key, value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rendered(query: Query) -> String {
        let mut url = Url::parse("https://example.supabase.co/rest/v1/projetos").unwrap();
        query.apply(&mut url);
        url.query().unwrap_or_default().to_string()
    }

    #[test]
    fn filters_render_as_postgrest_operators() {
        let query = Query::new()
            .select("id,nome")
            .eq("status", "EM_ANDAMENTO")
            .gte("prazo", "2026-01-01")
            .order("criado_em", SortDir::Desc);
        assert_eq!(
            rendered(query),
            "select=id%2Cnome&status=eq.EM_ANDAMENTO&prazo=gte.2026-01-01&order=criado_em.desc"
        );
    }

    #[test]
    fn in_filter_joins_values_into_one_parameter() {
        let query = Query::new().in_("status", &["PENDENTE", "EM_ANDAMENTO"]);
        assert_eq!(rendered(query), "status=in.%28PENDENTE%2CEM_ANDAMENTO%29");
    }

    #[test]
    fn range_maps_to_offset_and_limit() {
        let query = Query::new().range(20, 39);
        assert_eq!(rendered(query), "offset=20&limit=20");
    }
}
