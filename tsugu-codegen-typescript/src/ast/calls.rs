//! Dispatcher call and promise chain builders.

use tsugu_codegen::{CodeBuilder, CodeFragment, Renderable};

/// A multi-line call to the shared HTTP verb dispatcher.
///
/// Renders as `return Http.getRequest(` followed by one argument per line.
/// A bare call closes with `);`; a call wrapped in a [`PromiseChain`]
/// closes with `)` and lets the chain continue.
#[derive(Debug, Clone)]
pub struct DispatchCall {
    callee: String,
    args: Vec<String>,
}

impl DispatchCall {
    pub fn new(callee: impl Into<String>) -> Self {
        Self {
            callee: callee.into(),
            args: Vec::new(),
        }
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    fn to_fragments_with_close(&self, close: &str) -> Vec<CodeFragment> {
        vec![CodeFragment::Block {
            header: format!("return {}(", self.callee),
            body: self
                .args
                .iter()
                .map(|a| CodeFragment::Line(format!("{},", a)))
                .collect(),
            close: Some(close.to_string()),
        }]
    }
}

impl Renderable for DispatchCall {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        self.to_fragments_with_close(");")
    }
}

/// One `.method((params) => { ... })` link in a promise chain.
#[derive(Debug, Clone)]
pub struct ChainLink {
    method: String,
    params: String,
    body: Vec<String>,
}

impl ChainLink {
    pub fn new(method: impl Into<String>, params: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            params: params.into(),
            body: Vec::new(),
        }
    }

    pub fn body_line(mut self, line: impl Into<String>) -> Self {
        self.body.push(line.into());
        self
    }

    fn to_fragment(&self, close: &str) -> CodeFragment {
        CodeFragment::Block {
            header: format!(".{}(({}) => {{", self.method, self.params),
            body: self
                .body
                .iter()
                .map(|l| CodeFragment::Line(l.clone()))
                .collect(),
            close: Some(close.to_string()),
        }
    }
}

/// A dispatcher call with `.then`/`.catch`/`.finally` links wired around it.
#[derive(Debug, Clone)]
pub struct PromiseChain {
    call: DispatchCall,
    links: Vec<ChainLink>,
}

impl PromiseChain {
    pub fn new(call: DispatchCall) -> Self {
        Self {
            call,
            links: Vec::new(),
        }
    }

    pub fn link(mut self, link: ChainLink) -> Self {
        self.links.push(link);
        self
    }

    /// Build the chain as a string.
    pub fn build(&self) -> String {
        self.to_fragments()
            .into_iter()
            .fold(CodeBuilder::typescript(), |b, f| b.apply_fragment(f))
            .build()
    }
}

impl Renderable for PromiseChain {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        if self.links.is_empty() {
            return self.call.to_fragments();
        }

        let mut fragments = self.call.to_fragments_with_close(")");

        let last = self.links.len() - 1;
        let chain = self
            .links
            .iter()
            .enumerate()
            .map(|(i, link)| link.to_fragment(if i == last { "});" } else { "})" }))
            .collect();

        fragments.push(CodeFragment::Indent(chain));

        fragments
    }
}
