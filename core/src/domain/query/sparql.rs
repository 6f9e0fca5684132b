//! Intermediate representation of a SPARQL `SELECT` query and its serializer.
//!
//! Queries are assembled as a list of clauses and rendered to text in one
//! place. Every value that ends up in the text has already gone through one
//! of the types in [`super::terms`].

use std::fmt;

use super::terms::{Iri, Literal, LocalName};

/// Namespaces used by the knowledge base.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Prefix {
    Crm,
    Dcterms,
    Lrm,
    Person,
    Rdfs,
    Spatrem,
    Xsd,
}

impl Prefix {
    pub const ALL: [Prefix; 7] = [
        Prefix::Crm,
        Prefix::Dcterms,
        Prefix::Lrm,
        Prefix::Person,
        Prefix::Rdfs,
        Prefix::Spatrem,
        Prefix::Xsd,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Prefix::Crm => "crm",
            Prefix::Dcterms => "dcterms",
            Prefix::Lrm => "lrm",
            Prefix::Person => "person",
            Prefix::Rdfs => "rdfs",
            Prefix::Spatrem => "spatrem",
            Prefix::Xsd => "xsd",
        }
    }

    pub fn namespace(self) -> &'static str {
        match self {
            Prefix::Crm => "http://www.cidoc-crm.org/cidoc-crm/",
            Prefix::Dcterms => "http://purl.org/dc/terms/",
            Prefix::Lrm => "http://iflastandards.info/ns/lrm/lrmer/",
            Prefix::Person => "http://spacesoftranslation.org/ns/people/",
            Prefix::Rdfs => "http://www.w3.org/2000/01/rdf-schema#",
            Prefix::Spatrem => "http://spacesoftranslation.org/ns/spatrem/",
            Prefix::Xsd => "http://www.w3.org/2001/XMLSchema#",
        }
    }
}

/// Prefixed name. Vocabulary terms use static local parts; entity lookups use
/// a validated [`LocalName`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Name {
    pub prefix: Prefix,
    pub local: String,
}

impl Name {
    pub fn new(prefix: Prefix, local: &'static str) -> Self {
        Self {
            prefix,
            local: local.to_string(),
        }
    }

    pub fn entity(prefix: Prefix, local: &LocalName) -> Self {
        Self {
            prefix,
            local: local.as_str().to_string(),
        }
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.prefix.label(), self.local)
    }
}

pub fn crm(local: &'static str) -> Name {
    Name::new(Prefix::Crm, local)
}

pub fn dcterms(local: &'static str) -> Name {
    Name::new(Prefix::Dcterms, local)
}

pub fn lrm(local: &'static str) -> Name {
    Name::new(Prefix::Lrm, local)
}

pub fn rdfs(local: &'static str) -> Name {
    Name::new(Prefix::Rdfs, local)
}

pub fn spatrem(local: &'static str) -> Name {
    Name::new(Prefix::Spatrem, local)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Term {
    Var(&'static str),
    Name(Name),
    Iri(Iri),
    Literal(Literal),
    Integer(i64),
}

impl Term {
    pub fn var(&self) -> Option<&'static str> {
        match self {
            Term::Var(name) => Some(*name),
            _ => None,
        }
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Term::Var(name) => write!(f, "?{}", name),
            Term::Name(name) => write!(f, "{}", name),
            Term::Iri(iri) => write!(f, "{}", iri),
            Term::Literal(literal) => write!(f, "{}", literal),
            Term::Integer(value) => write!(f, "{}", value),
        }
    }
}

pub fn var(name: &'static str) -> Term {
    Term::Var(name)
}

impl From<Name> for Term {
    fn from(name: Name) -> Self {
        Term::Name(name)
    }
}

impl From<Iri> for Term {
    fn from(iri: Iri) -> Self {
        Term::Iri(iri)
    }
}

impl From<Literal> for Term {
    fn from(literal: Literal) -> Self {
        Term::Literal(literal)
    }
}

/// Predicate position: `a` or a sequence path `p1 / p2 / ...`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Predicate {
    Type,
    Path(Vec<Name>),
}

impl From<Name> for Predicate {
    fn from(name: Name) -> Self {
        Predicate::Path(vec![name])
    }
}

impl fmt::Display for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Predicate::Type => f.write_str("a"),
            Predicate::Path(steps) => {
                for (i, step) in steps.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" / ")?;
                    }
                    write!(f, "{}", step)?;
                }
                Ok(())
            }
        }
    }
}

pub fn path(steps: impl IntoIterator<Item = Name>) -> Predicate {
    Predicate::Path(steps.into_iter().collect())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompareOp {
    Eq,
    Ne,
    Gt,
    Lt,
}

impl CompareOp {
    fn symbol(self) -> &'static str {
        match self {
            CompareOp::Eq => "=",
            CompareOp::Ne => "!=",
            CompareOp::Gt => ">",
            CompareOp::Lt => "<",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operand {
    Term(Term),
    /// `xsd:integer(?var)`; dates and years are stored as untyped literals.
    IntegerCast(&'static str),
}

impl Operand {
    fn var(&self) -> Option<&'static str> {
        match self {
            Operand::Term(term) => term.var(),
            Operand::IntegerCast(name) => Some(*name),
        }
    }
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operand::Term(term) => write!(f, "{}", term),
            Operand::IntegerCast(name) => write!(f, "xsd:integer(?{})", name),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comparison {
    pub left: Operand,
    pub op: CompareOp,
    pub right: Operand,
}

impl Comparison {
    pub fn equals(name: &'static str, value: impl Into<Term>) -> Self {
        Self {
            left: Operand::Term(Term::Var(name)),
            op: CompareOp::Eq,
            right: Operand::Term(value.into()),
        }
    }

    pub fn not_equals(name: &'static str, value: impl Into<Term>) -> Self {
        Self {
            left: Operand::Term(Term::Var(name)),
            op: CompareOp::Ne,
            right: Operand::Term(value.into()),
        }
    }

    pub fn integer_after(name: &'static str, bound: i64) -> Self {
        Self {
            left: Operand::IntegerCast(name),
            op: CompareOp::Gt,
            right: Operand::Term(Term::Integer(bound)),
        }
    }

    pub fn integer_before(name: &'static str, bound: i64) -> Self {
        Self {
            left: Operand::IntegerCast(name),
            op: CompareOp::Lt,
            right: Operand::Term(Term::Integer(bound)),
        }
    }

    pub fn vars(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.left.var().into_iter().chain(self.right.var())
    }
}

impl fmt::Display for Comparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.left, self.op.symbol(), self.right)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Clause {
    Triple {
        subject: Term,
        predicate: Predicate,
        object: Term,
    },
    Filter(Comparison),
    Optional(Vec<Clause>),
}

impl Clause {
    pub fn triple(
        subject: impl Into<Term>,
        predicate: impl Into<Predicate>,
        object: impl Into<Term>,
    ) -> Self {
        Clause::Triple {
            subject: subject.into(),
            predicate: predicate.into(),
            object: object.into(),
        }
    }

    fn render(&self, f: &mut fmt::Formatter<'_>, indent: usize) -> fmt::Result {
        let pad = "    ".repeat(indent);
        match self {
            Clause::Triple {
                subject,
                predicate,
                object,
            } => writeln!(f, "{}{} {} {} .", pad, subject, predicate, object),
            Clause::Filter(comparison) => writeln!(f, "{}FILTER({})", pad, comparison),
            Clause::Optional(clauses) => {
                writeln!(f, "{}OPTIONAL {{", pad)?;
                for clause in clauses {
                    clause.render(f, indent + 1)?;
                }
                writeln!(f, "{}}}", pad)
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Projection {
    All,
    Vars(Vec<&'static str>),
}

/// A complete `SELECT DISTINCT` query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectQuery {
    projection: Projection,
    clauses: Vec<Clause>,
    order_by: Vec<&'static str>,
    offset: Option<u64>,
    limit: Option<u64>,
}

impl SelectQuery {
    pub fn select_all() -> Self {
        Self::with_projection(Projection::All)
    }

    pub fn select(vars: &[&'static str]) -> Self {
        Self::with_projection(Projection::Vars(vars.to_vec()))
    }

    fn with_projection(projection: Projection) -> Self {
        Self {
            projection,
            clauses: Vec::new(),
            order_by: Vec::new(),
            offset: None,
            limit: None,
        }
    }

    pub fn push(&mut self, clause: Clause) -> &mut Self {
        self.clauses.push(clause);
        self
    }

    pub fn triple(
        &mut self,
        subject: impl Into<Term>,
        predicate: impl Into<Predicate>,
        object: impl Into<Term>,
    ) -> &mut Self {
        self.push(Clause::triple(subject, predicate, object))
    }

    pub fn filter(&mut self, comparison: Comparison) -> &mut Self {
        self.push(Clause::Filter(comparison))
    }

    pub fn optional(&mut self, clauses: Vec<Clause>) -> &mut Self {
        self.push(Clause::Optional(clauses))
    }

    pub fn order_by(&mut self, name: &'static str) -> &mut Self {
        if !self.order_by.contains(&name) {
            self.order_by.push(name);
        }
        self
    }

    pub fn offset(&mut self, offset: u64) -> &mut Self {
        self.offset = Some(offset);
        self
    }

    pub fn limit(&mut self, limit: u64) -> &mut Self {
        self.limit = Some(limit);
        self
    }

    pub fn clauses(&self) -> &[Clause] {
        &self.clauses
    }

    pub fn filters(&self) -> impl Iterator<Item = &Comparison> {
        self.clauses.iter().filter_map(|clause| match clause {
            Clause::Filter(comparison) => Some(comparison),
            _ => None,
        })
    }

    pub fn sort_keys(&self) -> &[&'static str] {
        &self.order_by
    }

    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for SelectQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for prefix in Prefix::ALL {
            writeln!(f, "PREFIX {}: <{}>", prefix.label(), prefix.namespace())?;
        }

        f.write_str("SELECT DISTINCT")?;
        match &self.projection {
            Projection::All => f.write_str(" *")?,
            Projection::Vars(vars) => {
                for name in vars {
                    write!(f, " ?{}", name)?;
                }
            }
        }
        f.write_str(" WHERE {\n")?;
        for clause in &self.clauses {
            clause.render(f, 1)?;
        }
        f.write_str("}")?;

        if !self.order_by.is_empty() {
            f.write_str("\nORDER BY")?;
            for name in &self.order_by {
                write!(f, " ?{}", name)?;
            }
        }
        if let Some(offset) = self.offset {
            write!(f, "\nOFFSET {}", offset)?;
        }
        if let Some(limit) = self.limit {
            write!(f, "\nLIMIT {}", limit)?;
        }
        Ok(())
    }
}

#[cfg(test)]
impl SelectQuery {
    /// Returns the first variable used by a filter or sort before any triple
    /// has bound it.
    pub fn first_unbound_use(&self) -> Option<&'static str> {
        fn bound_by(clause: &Clause, bound: &mut Vec<&'static str>) {
            match clause {
                Clause::Triple {
                    subject, object, ..
                } => bound.extend(subject.var().into_iter().chain(object.var())),
                Clause::Optional(inner) => inner.iter().for_each(|c| bound_by(c, bound)),
                Clause::Filter(_) => {}
            }
        }

        let mut bound = Vec::new();
        for clause in &self.clauses {
            if let Clause::Filter(comparison) = clause {
                if let Some(name) = comparison.vars().find(|name| !bound.contains(name)) {
                    return Some(name);
                }
            }
            bound_by(clause, &mut bound);
        }
        self.order_by
            .iter()
            .copied()
            .find(|name| !bound.contains(name))
    }
}
