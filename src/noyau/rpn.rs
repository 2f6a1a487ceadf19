// src/noyau/rpn.rs
//
// Shunting-yard -> RPN (postfix)
//
// Règles:
// - Fct(..) : fonction unaire, “collée” à son groupe parenthésé
//   et sortie juste après la parenthèse fermante.
// - Moins unaire:
//    - si '-' arrive quand on n'attend PAS une valeur, on injecte 0 :
//      "-x" => "0 x -"
//    - dans ce cas le '-' s'empile SANS dépiler l'opérateur en attente,
//      sinon le 0 injecté se lierait à l'opérande gauche de celui-ci :
//      "2*-3" => "2 0 3 - *" (= -6)
// - Associativité:
//    - '^' est associatif à droite : on ne dépile que sur précédence
//      STRICTEMENT supérieure ("2^3^2" = 2^(3^2))
//    - + - * / associatifs à gauche : dépile sur précédence >=
//
// L'imbrication est re-vérifiée ici même si le pré-filtre parenthèses
// est déjà passé (défense en profondeur).

use super::erreurs::ErreurSyntaxe;
use super::jetons::Tok;

/// Table de précédence : + - (2) < * / (3) < ^ (4).
fn precedence(t: &Tok) -> i32 {
    match t {
        Tok::Plus | Tok::Minus => 2,
        Tok::Star | Tok::Slash => 3,
        Tok::Caret => 4,
        _ => 0,
    }
}

fn is_right_associative(t: &Tok) -> bool {
    matches!(t, Tok::Caret)
}

/// Convertit une suite de jetons en RPN (notation polonaise inversée).
///
/// Exemple:
///   tokens: [Fct(Sin), LPar, Var, Slash, Num(2), RPar]
///   rpn:    [Var, Num(2), Slash, Fct(Sin)]
pub fn to_rpn(tokens: &[Tok]) -> Result<Vec<Tok>, ErreurSyntaxe> {
    let mut out: Vec<Tok> = Vec::new();
    let mut ops: Vec<Tok> = Vec::new();

    // “valeur” = un atome ou une expression fermée.
    // Sert à détecter le moins unaire.
    let mut prev_was_value = false;

    for tok in tokens.iter().copied() {
        match tok {
            Tok::Num(_) | Tok::Var => {
                out.push(tok);
                prev_was_value = true;
            }

            Tok::Fct(_) => {
                // fonction : on la garde sur la pile (elle sortira après son argument)
                ops.push(tok);
                prev_was_value = false;
            }

            Tok::LPar => {
                ops.push(tok);
                prev_was_value = false;
            }

            Tok::RPar => {
                // dépile jusqu'à '(' ; sous-flux = fermante orpheline
                let mut ouvrante_trouvee = false;
                while let Some(top) = ops.pop() {
                    if matches!(top, Tok::LPar) {
                        ouvrante_trouvee = true;
                        break;
                    }
                    out.push(top);
                }
                if !ouvrante_trouvee {
                    return Err(ErreurSyntaxe::FermanteOrpheline);
                }

                // si une fonction est au sommet, on la sort aussi
                if matches!(ops.last(), Some(Tok::Fct(_))) {
                    out.push(ops.pop().unwrap());
                }

                prev_was_value = true;
            }

            Tok::Plus | Tok::Star | Tok::Slash | Tok::Caret => {
                depile_selon_precedence(&tok, &mut ops, &mut out);
                ops.push(tok);
                prev_was_value = false;
            }

            Tok::Minus => {
                if !prev_was_value {
                    // moins unaire : injecte 0 et garde le '-' AU-DESSUS de
                    // l'opérateur en attente (surtout ne pas dépiler : le 0
                    // injecté doit se lier au seul argument qui suit, pas à
                    // l'opérande gauche de l'opérateur en attente).
                    // "2*-3" => "2 0 3 - *", PAS "2 0 * 3 -"
                    out.push(Tok::Num(0.0));
                } else {
                    depile_selon_precedence(&Tok::Minus, &mut ops, &mut out);
                }
                ops.push(Tok::Minus);
                prev_was_value = false;
            }
        }
    }

    // vide la pile ops
    while let Some(op) = ops.pop() {
        if matches!(op, Tok::LPar) {
            return Err(ErreurSyntaxe::NonFermees);
        }
        out.push(op);
    }

    Ok(out)
}

/// Dépile vers `out` tant que:
/// - on n'est pas bloqué par '('
/// - on ne traverse pas une fonction (elle reste collée à son argument)
/// - la précédence/associativité exige de sortir l'opérateur du haut
fn depile_selon_precedence(tok: &Tok, ops: &mut Vec<Tok>, out: &mut Vec<Tok>) {
    while let Some(top) = ops.last() {
        if matches!(top, Tok::LPar | Tok::Fct(_)) {
            break;
        }

        let p_top = precedence(top);
        let p_tok = precedence(tok);

        let doit_pop = if is_right_associative(tok) {
            p_top > p_tok
        } else {
            p_top >= p_tok
        };

        if doit_pop {
            out.push(ops.pop().unwrap());
        } else {
            break;
        }
    }
}
