//! # Company Types
//!
//! Business categories offered by the registration form. The list is
//! advisory: registration accepts any free-text type, but callers can use
//! [`is_known_company_type`] to flag entries outside the catalogue.

/// Known business types, sorted by code point so lookups can binary-search.
pub const COMPANY_TYPES: &[&str] = &[
    "Academia",
    "Agência de Marketing",
    "Agência de Publicidade",
    "Agência de Viagens",
    "Atacado de Alimentos",
    "Atacado de Bebidas",
    "Atacado de Calçados",
    "Atacado de Eletrônicos",
    "Atacado de Materiais de Construção",
    "Atacado de Roupas",
    "Auto Escola",
    "Açougue",
    "Bar",
    "Barbearia",
    "Cafeteria",
    "Centro de Treinamento",
    "Clínica Veterinária",
    "Confeitaria",
    "Consultoria",
    "Distribuidora de Bebidas",
    "Empório",
    "Escola",
    "Escritório de Advocacia",
    "Escritório de Contabilidade",
    "Estúdio Fotográfico",
    "Estúdio de Yoga",
    "Farmácia",
    "Floricultura",
    "Frutaria",
    "Gráfica",
    "Hamburgueria",
    "Hotel",
    "Imobiliária",
    "Joalheria",
    "Lanchonete",
    "Lavanderia",
    "Livraria",
    "Loja de Artesanato",
    "Loja de Brinquedos",
    "Loja de Calçados",
    "Loja de Decoração",
    "Loja de Eletrônicos",
    "Loja de Materiais de Construção",
    "Loja de Móveis",
    "Loja de Roupas",
    "Mercearia",
    "Oficina Mecânica",
    "Padaria",
    "Papelaria",
    "Peixaria",
    "Perfumaria",
    "Pet Shop",
    "Pizzaria",
    "Pousada",
    "Restaurante",
    "Salão de Beleza",
    "Sorveteria",
    "Ótica",
];

/// True when `value` (ignoring surrounding whitespace) is in [`COMPANY_TYPES`].
pub fn is_known_company_type(value: &str) -> bool {
    COMPANY_TYPES.binary_search(&value.trim()).is_ok()
}
