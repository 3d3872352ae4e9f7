use std::collections::HashMap;
use std::hash::Hash;

/// 依相等鍵分組。
///
/// 群組依鍵第一次出現的順序排列，群組內保留輸入順序。
pub fn group_by_key<T, K, I, F>(items: I, mut key_of: F) -> Vec<(K, Vec<T>)>
where
    I: IntoIterator<Item = T>,
    K: Eq + Hash + Clone,
    F: FnMut(&T) -> K,
{
    let mut positions: HashMap<K, usize> = HashMap::new();
    let mut groups: Vec<(K, Vec<T>)> = Vec::new();

    for item in items {
        let key = key_of(&item);
        match positions.get(&key) {
            Some(&index) => groups[index].1.push(item),
            None => {
                positions.insert(key.clone(), groups.len());
                groups.push((key, vec![item]));
            }
        }
    }

    groups
}
