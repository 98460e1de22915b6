mod content;
mod node;

pub use content::{Content, InputKind};
pub use node::Element;

/// Find an element by ID in the tree.
pub fn find_element<'a>(root: &'a Element, id: &str) -> Option<&'a Element> {
    if root.id == id {
        return Some(root);
    }

    if let Content::Children(children) = &root.content {
        for child in children {
            if let Some(found) = find_element(child, id) {
                return Some(found);
            }
        }
    }

    None
}

/// Find an element by ID in the tree, mutably.
pub fn find_element_mut<'a>(root: &'a mut Element, id: &str) -> Option<&'a mut Element> {
    if root.id == id {
        return Some(root);
    }

    if let Content::Children(children) = &mut root.content {
        for child in children {
            if let Some(found) = find_element_mut(child, id) {
                return Some(found);
            }
        }
    }

    None
}

/// Child-index path from the root to the element with the given ID.
///
/// An empty path addresses the root itself.
pub fn find_path(root: &Element, id: &str) -> Option<Vec<usize>> {
    if root.id == id {
        return Some(Vec::new());
    }

    if let Content::Children(children) = &root.content {
        for (index, child) in children.iter().enumerate() {
            if let Some(mut path) = find_path(child, id) {
                path.insert(0, index);
                return Some(path);
            }
        }
    }

    None
}

/// Resolve a child-index path produced by [`find_path`].
pub fn element_at_path<'a>(root: &'a Element, path: &[usize]) -> Option<&'a Element> {
    let mut current = root;
    for &index in path {
        current = current.child_elements().get(index)?;
    }
    Some(current)
}

/// Resolve a child-index path produced by [`find_path`], mutably.
pub fn element_at_path_mut<'a>(root: &'a mut Element, path: &[usize]) -> Option<&'a mut Element> {
    let mut current = root;
    for &index in path {
        current = match &mut current.content {
            Content::Children(children) => children.get_mut(index)?,
            _ => return None,
        };
    }
    Some(current)
}

/// Nearest ancestor-or-self of `id` matching the predicate.
///
/// Returns the matching element's id. This is the owned-tree counterpart of
/// a `closest()` query: ancestry is recovered from the root since nodes do
/// not carry parent links.
pub fn closest_matching(
    root: &Element,
    id: &str,
    matches: impl Fn(&Element) -> bool,
) -> Option<String> {
    let path = find_path(root, id)?;
    for cut in (0..=path.len()).rev() {
        let candidate = element_at_path(root, &path[..cut])?;
        if matches(candidate) {
            return Some(candidate.id.clone());
        }
    }
    None
}

/// Collect the ids of every element in the tree matching the predicate,
/// in document order. Includes the root itself.
pub fn collect_matching(root: &Element, matches: impl Fn(&Element) -> bool) -> Vec<String> {
    let mut ids = Vec::new();
    collect_into(root, &matches, &mut ids);
    ids
}

fn collect_into(element: &Element, matches: &impl Fn(&Element) -> bool, ids: &mut Vec<String>) {
    if matches(element) {
        ids.push(element.id.clone());
    }
    if let Content::Children(children) = &element.content {
        for child in children {
            collect_into(child, matches, ids);
        }
    }
}
