// src/noyau/jetons.rs

use super::erreurs::ErreurLex;

/// Fonctions unaires reconnues (ensemble fermé, constant pour tout le process).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Fonction {
    Sqrt,
    Sin,
    Cos,
    Tan,
    Log, // logarithme népérien
}

impl Fonction {
    /// Résolution par nom (déjà normalisé en minuscules).
    pub fn depuis_nom(nom: &str) -> Option<Self> {
        match nom {
            "sqrt" => Some(Self::Sqrt),
            "sin" => Some(Self::Sin),
            "cos" => Some(Self::Cos),
            "tan" => Some(Self::Tan),
            "log" => Some(Self::Log),
            _ => None,
        }
    }

    pub fn nom(self) -> &'static str {
        match self {
            Self::Sqrt => "sqrt",
            Self::Sin => "sin",
            Self::Cos => "cos",
            Self::Tan => "tan",
            Self::Log => "log",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Tok {
    Num(f64),

    /// La variable x (substituée à l'évaluation).
    Var,

    Fct(Fonction),

    Plus,
    Minus,
    Star,
    Slash,
    Caret, // ^

    LPar,
    RPar,
}

/// Tokenize une chaîne en jetons.
/// Supporte:
/// - nombres flottants (ex: 12, 3.5, 2e-1, 1.5E+3)
/// - opérateurs + - * / ^
/// - parenthèses ( )
/// - la variable x (insensible à la casse)
/// - fonctions sqrt/sin/cos/tan/log (insensibles à la casse)
///
/// NOTE: un '-' de tête n'appartient PAS au littéral numérique — il sort
/// comme opérateur Minus (le moins unaire est géré au niveau RPN).
/// Le signe d'exposant n'est consommé qu'immédiatement après 'e'/'E'.
pub fn tokenize(s: &str) -> Result<Vec<Tok>, ErreurLex> {
    let mut out = Vec::new();
    let chars: Vec<char> = s.chars().collect();
    let mut i: usize = 0;

    while i < chars.len() {
        let c = chars[i];

        if c.is_whitespace() {
            i += 1;
            continue;
        }

        // Parenthèses
        if c == '(' {
            out.push(Tok::LPar);
            i += 1;
            continue;
        }
        if c == ')' {
            out.push(Tok::RPar);
            i += 1;
            continue;
        }

        // Opérateurs
        match c {
            '+' => {
                out.push(Tok::Plus);
                i += 1;
                continue;
            }
            '-' => {
                out.push(Tok::Minus);
                i += 1;
                continue;
            }
            '*' => {
                out.push(Tok::Star);
                i += 1;
                continue;
            }
            '/' => {
                out.push(Tok::Slash);
                i += 1;
                continue;
            }
            '^' => {
                out.push(Tok::Caret);
                i += 1;
                continue;
            }
            _ => {}
        }

        // Identifiants ASCII : [a-zA-Z_][a-zA-Z0-9_]*
        // On scanne le mot ENTIER avant de décider : pas de préfixe tronqué
        // accepté en bout d'entrée ("sq" n'est jamais pris pour "sqrt").
        if c.is_ascii_alphabetic() || c == '_' {
            let start = i;
            i += 1;
            while i < chars.len() && (chars[i].is_ascii_alphanumeric() || chars[i] == '_') {
                i += 1;
            }
            let word: String = chars[start..i].iter().collect();
            let w = word.to_lowercase();

            if w == "x" {
                out.push(Tok::Var);
            } else if let Some(f) = Fonction::depuis_nom(&w) {
                out.push(Tok::Fct(f));
            } else {
                return Err(ErreurLex::NomInconnu(word));
            }
            continue;
        }

        // Littéral numérique : chiffres, au plus un point décimal,
        // exposant e/E optionnel avec signe optionnel.
        if c.is_ascii_digit() {
            let start = i;
            while i < chars.len() && chars[i].is_ascii_digit() {
                i += 1;
            }

            // partie décimale
            if i < chars.len() && chars[i] == '.' {
                i += 1;
                while i < chars.len() && chars[i].is_ascii_digit() {
                    i += 1;
                }
            }

            // exposant : 'e'/'E' [+-]? chiffres — consommé seulement si
            // au moins un chiffre suit (sinon "2e" serait avalé à tort).
            if i < chars.len() && (chars[i] == 'e' || chars[i] == 'E') {
                let save = i;
                i += 1;
                if i < chars.len() && (chars[i] == '+' || chars[i] == '-') {
                    i += 1;
                }
                if i < chars.len() && chars[i].is_ascii_digit() {
                    while i < chars.len() && chars[i].is_ascii_digit() {
                        i += 1;
                    }
                } else {
                    i = save; // pas un exposant : on remet sur 'e'
                }
            }

            let lit: String = chars[start..i].iter().collect();
            let v: f64 = lit
                .parse()
                .map_err(|_| ErreurLex::NombreInvalide(lit.clone()))?;
            out.push(Tok::Num(v));
            continue;
        }

        return Err(ErreurLex::CaractereInattendu(c));
    }

    Ok(out)
}

/// Format utilitaire (debug/“démarche”) : liste de jetons en texte.
pub fn format_tokens(tokens: &[Tok]) -> String {
    let mut out = Vec::new();
    for t in tokens {
        let s = match t {
            Tok::Num(v) => format!("{v}"),
            Tok::Var => "x".to_string(),
            Tok::Fct(f) => f.nom().to_string(),

            Tok::Plus => "+".to_string(),
            Tok::Minus => "-".to_string(),
            Tok::Star => "*".to_string(),
            Tok::Slash => "/".to_string(),
            Tok::Caret => "^".to_string(),

            Tok::LPar => "(".to_string(),
            Tok::RPar => ")".to_string(),
        };
        out.push(s);
    }
    out.join(" ")
}
