// src/noyau/parentheses.rs
//
// Pré-filtre d'équilibre des parenthèses, AVANT tokenisation.
// Scan caractère par caractère : profondeur +1 sur '(', -1 sur ')'.
// Échec immédiat si ')' arrive à profondeur nulle; succès seulement
// si la profondeur retombe à zéro en fin de chaîne.
//
// C'est un fast-fail pur : to_rpn re-vérifie de toute façon l'imbrication
// (défense en profondeur). Le diagnostic distingue les deux fautes pour
// que le pipeline rapporte la bonne : fermante orpheline vs non fermées.

use super::erreurs::ErreurSyntaxe;

/// Vérifie l'équilibre sur la chaîne BRUTE, avec faute classée.
pub fn verifie_parentheses(s: &str) -> Result<(), ErreurSyntaxe> {
    let mut profondeur: usize = 0;

    for c in s.chars() {
        match c {
            '(' => profondeur += 1,
            ')' => {
                if profondeur == 0 {
                    return Err(ErreurSyntaxe::FermanteOrpheline);
                }
                profondeur -= 1;
            }
            _ => {}
        }
    }

    if profondeur == 0 {
        Ok(())
    } else {
        Err(ErreurSyntaxe::NonFermees)
    }
}

/// Forme booléenne du pré-filtre (pratique pour un abort simple).
pub fn parentheses_equilibrees(s: &str) -> bool {
    verifie_parentheses(s).is_ok()
}
