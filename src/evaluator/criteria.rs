use once_cell::sync::Lazy;

/// One scripted conversational behavior, tested through a fixed list of
/// acceptable phrase variants. Variants are stored lowercased since matching
/// is case-insensitive.
#[derive(Debug, Clone)]
pub struct Criterion {
    pub name: String,
    pub variants: Vec<String>,
}

impl Criterion {
    pub fn new(name: &str, variants: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            variants: variants.iter().map(|v| v.to_lowercase()).collect(),
        }
    }
}

/// Ordered collection of performance criteria. Iteration order is definition
/// order, which keeps scoring deterministic.
#[derive(Debug, Clone)]
pub struct CriteriaSet {
    criteria: Vec<Criterion>,
}

impl CriteriaSet {
    pub fn new(criteria: Vec<Criterion>) -> Self {
        Self { criteria }
    }

    pub fn criteria(&self) -> &[Criterion] {
        &self.criteria
    }

    pub fn len(&self) -> usize {
        self.criteria.len()
    }

    pub fn is_empty(&self) -> bool {
        self.criteria.is_empty()
    }
}

impl Default for CriteriaSet {
    fn default() -> Self {
        DEFAULT_CRITERIA.clone()
    }
}

// The scripted courtesy rubric for customer-service calls: greet the caller,
// ask for an identifying number, hand over the requested information, offer
// further help and close politely.
static DEFAULT_CRITERIA: Lazy<CriteriaSet> = Lazy::new(|| {
    CriteriaSet::new(vec![
        Criterion::new(
            "greeting",
            &[
                "buenos días",
                "buenas tardes",
                "buenas noches",
                "bienvenido a",
                "bienvenida a",
            ],
        ),
        Criterion::new(
            "ask_number",
            &[
                "número de cuenta",
                "numero de cuenta",
                "número de cliente",
                "numero de cliente",
                "número de contrato",
            ],
        ),
        Criterion::new(
            "provide_info",
            &[
                "le informo que",
                "le comento que",
                "según nuestro sistema",
                "segun nuestro sistema",
                "su saldo es",
            ],
        ),
        Criterion::new(
            "offer_assistance",
            &[
                "algo más en lo que",
                "algo mas en lo que",
                "puedo ayudarle con",
                "puedo ayudarte con",
                "alguna otra consulta",
            ],
        ),
        Criterion::new(
            "end_politely",
            &[
                "gracias por su llamada",
                "gracias por comunicarse",
                "que tenga un buen día",
                "que tenga un excelente día",
                "hasta luego",
            ],
        ),
    ])
});

pub fn default_criteria() -> &'static CriteriaSet {
    &DEFAULT_CRITERIA
}
