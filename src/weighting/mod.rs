//! Heuristic base-weight policy for extracted symbols.
//!
//! Every function here is total: any symbol gets a finite multiplier, and
//! the product of the three multipliers is the symbol's base weight. Base
//! weights only influence which duplicate definition wins an identity key;
//! final digest ordering comes from file rank × reference frequency.

use crate::types::{SymbolDefinition, SymbolKind};

/// Framework lifecycle hooks. Declared on nearly every behaviour class, so
/// they carry almost no information about what a project actually does.
const LIFECYCLE_HOOKS: &[&str] = &[
    "Start",
    "Update",
    "FixedUpdate",
    "LateUpdate",
    "OnGUI",
    "OnDisable",
    "OnEnable",
    "Awake",
    "OnDestroy",
];

/// Boilerplate members: equality, string conversion, collection mutation.
const BOILERPLATE_METHODS: &[&str] = &[
    "ToString",
    "Equals",
    "GetHashCode",
    "GetEnumerator",
    "CopyTo",
    "Contains",
    "Clear",
    "Add",
    "Remove",
    "SerializeObject",
];

/// Pure heuristic weighting for symbols, configured once and passed by
/// reference wherever a build needs it.
#[derive(Debug, Clone)]
pub struct WeightingPolicy {
    /// Lowercased path fragments marking the engine's own code. Symbols
    /// under these paths must never surface in a digest of the host
    /// project, so their namespace multiplier is 0.
    internal_markers: Vec<String>,
}

impl Default for WeightingPolicy {
    fn default() -> Self {
        Self {
            internal_markers: vec!["codemap".to_string()],
        }
    }
}

impl WeightingPolicy {
    pub fn new(internal_markers: Vec<String>) -> Self {
        let internal_markers = internal_markers
            .into_iter()
            .map(|m| m.to_lowercase())
            .collect();
        Self { internal_markers }
    }

    /// 0.0 for the engine's own namespace, 1.0 otherwise.
    pub fn namespace_multiplier(&self, relative_path: &str) -> f64 {
        let path = relative_path.to_lowercase();
        if self.internal_markers.iter().any(|m| path.contains(m)) {
            0.0
        } else {
            1.0
        }
    }

    /// Name-shape multiplier: private-convention names are demoted,
    /// architecturally significant class suffixes promoted, event-handler
    /// method prefixes demoted.
    pub fn symbol_multiplier(&self, symbol: &SymbolDefinition) -> f64 {
        let mut mul = if symbol.name.starts_with('_') { 0.1 } else { 1.0 };

        if symbol.kind == SymbolKind::Class
            && (symbol.name.ends_with("Service")
                || symbol.name.ends_with("Manager")
                || symbol.name.ends_with("Controller"))
        {
            mul *= 1.5;
        }

        if symbol.kind == SymbolKind::Method
            && (symbol.name.starts_with("On") || symbol.name.starts_with("Handle"))
        {
            mul *= 0.7;
        }

        mul
    }

    /// Method-only multiplier from the fixed weight tables; 1.0 for
    /// everything that is not a method.
    pub fn method_multiplier(&self, symbol: &SymbolDefinition) -> f64 {
        if symbol.kind != SymbolKind::Method {
            return 1.0;
        }

        let name = symbol.name.as_str();

        if LIFECYCLE_HOOKS.contains(&name) || BOILERPLATE_METHODS.contains(&name) {
            return 0.1;
        }

        if name.starts_with("get_") || name.starts_with("set_") {
            return 0.4;
        }

        if symbol.parameters.is_empty()
            && (name.starts_with("Get") || name.starts_with("Set") || name.starts_with("Is"))
        {
            return 0.1;
        }

        1.0
    }

    /// `namespace × symbol × method`.
    pub fn base_weight(&self, symbol: &SymbolDefinition, namespace_mul: f64) -> f64 {
        namespace_mul * self.symbol_multiplier(symbol) * self.method_multiplier(symbol)
    }

    /// Identity key for duplicate-definition resolution: `kind:name`, with
    /// the ordered parameter types appended for methods so overloads stay
    /// distinct.
    pub fn definition_key(&self, symbol: &SymbolDefinition) -> String {
        let kind = match symbol.kind {
            SymbolKind::Class => "class",
            SymbolKind::Method => "method",
            SymbolKind::Property => "property",
        };

        let mut key = format!("{kind}:{}", symbol.name);
        if symbol.kind == SymbolKind::Method {
            let param_types: Vec<&str> = symbol.parameter_types().collect();
            key.push('(');
            key.push_str(&param_types.join(","));
            key.push(')');
        }
        key
    }
}
