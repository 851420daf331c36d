use crate::aa::{AAFramework, Extension, LabelType};

/// Computes the grounded extension of an AF.
///
/// The computation is the classical polynomial-time fixpoint: unattacked arguments are
/// accepted, the arguments they attack are defeated, and attack counters are decreased
/// until no new argument gets accepted.
pub fn grounded_extension<T>(af: &AAFramework<T>) -> Extension
where
    T: LabelType,
{
    let cap = af.max_argument_id().map_or(0, |max| max + 1);
    let mut ext = Vec::new();
    let mut defeated = vec![false; cap];
    let mut n_attackers = vec![0; cap];
    for arg in af.argument_set().iter() {
        let n = af.iter_attacks_to(arg).count();
        n_attackers[arg.id()] = n;
        if n == 0 {
            ext.push(arg.id());
        }
    }
    let mut n_processed = 0;
    while n_processed < ext.len() {
        let accepted = ext[n_processed];
        let defeated_ids = af.attacked_ids_from(accepted).collect::<Vec<usize>>();
        for defeated_id in defeated_ids {
            if !defeated[defeated_id] {
                defeated[defeated_id] = true;
                for attacked in af.attacked_ids_from(defeated_id) {
                    if n_attackers[attacked] == 1 {
                        ext.push(attacked);
                    } else {
                        n_attackers[attacked] -= 1;
                    }
                }
            }
        }
        n_processed += 1;
    }
    ext.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aa::ArgumentSet;

    fn af_with_attacks(
        labels: &[&'static str],
        attacks: &[(&'static str, &'static str)],
    ) -> AAFramework<&'static str> {
        let mut af =
            AAFramework::new_with_argument_set(ArgumentSet::new_with_labels(&labels.to_vec()));
        for (from, to) in attacks {
            af.new_attack(from, to).unwrap();
        }
        af
    }

    #[test]
    fn test_grounded_extension_tree() {
        let af = af_with_attacks(
            &["a", "b", "c", "d", "e", "f"],
            &[
                ("a", "b"),
                ("b", "c"),
                ("b", "d"),
                ("c", "e"),
                ("d", "e"),
                ("e", "f"),
            ],
        );
        assert_eq!(
            Extension::from_iter([0, 2, 3, 5]),
            grounded_extension(&af)
        );
    }

    #[test]
    fn test_grounded_extension_chain() {
        let af = af_with_attacks(
            &["a", "b", "c", "d", "e"],
            &[("a", "b"), ("b", "c"), ("c", "d"), ("d", "e")],
        );
        assert_eq!(Extension::from_iter([0, 2, 4]), grounded_extension(&af));
    }

    #[test]
    fn test_grounded_extension_empty_for_cycle() {
        let af = af_with_attacks(&["a", "b"], &[("a", "b"), ("b", "a")]);
        assert_eq!(Extension::new(), grounded_extension(&af));
    }

    #[test]
    fn test_grounded_extension_empty_af() {
        let af = af_with_attacks(&[], &[]);
        assert_eq!(Extension::new(), grounded_extension(&af));
    }

    #[test]
    fn test_grounded_extension_self_attacker() {
        let af = af_with_attacks(&["a", "b"], &[("a", "b"), ("b", "b")]);
        assert_eq!(Extension::from_iter([0]), grounded_extension(&af));
    }
}
