//! Running queries against source text.

use grasp_langs::LangImpl;
use grasp_query::{NoopTracer, Query, Tracer};

use crate::Result;

/// Query entry point on languages.
///
/// The input is parsed with the language, the query is compiled (and
/// wrapped in a search over the root tree unless it already is a root tree
/// query), then run. Only configuration problems are errors: a query that
/// does not match yields `Ok(None)`.
pub trait LangQuery {
    fn query<Ctx: Clone + 'static>(
        &self,
        input: &str,
        query: &Query<Ctx>,
        context: Ctx,
    ) -> Result<Option<Ctx>> {
        self.query_traced(input, query, context, &mut NoopTracer)
    }

    fn query_traced<Ctx: Clone + 'static>(
        &self,
        input: &str,
        query: &Query<Ctx>,
        context: Ctx,
        tracer: &mut dyn Tracer,
    ) -> Result<Option<Ctx>>;
}

impl<L: LangImpl + ?Sized> LangQuery for L {
    fn query_traced<Ctx: Clone + 'static>(
        &self,
        input: &str,
        query: &Query<Ctx>,
        context: Ctx,
        tracer: &mut dyn Tracer,
    ) -> Result<Option<Ctx>> {
        let compiled = query.compile()?;
        let cursor = self.cursor(input)?;
        Ok(compiled.run_traced(&cursor, context, tracer))
    }
}
