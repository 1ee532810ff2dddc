//! Generic structural diff over JSON trees
//!
//! Objects compare by key, arrays by index. A missing node is a REMOVE, a new
//! node a CREATE, and differing leaves (or differing node kinds) a CHANGE.

use serde_json::Value;

use super::change::{ChangePath, ChangeRecord, PathSegment};

pub fn diff_values(before: &Value, after: &Value) -> Vec<ChangeRecord> {
    let mut changes = Vec::new();
    let mut path = Vec::new();
    walk(before, after, &mut path, &mut changes);
    changes
}

fn walk(before: &Value, after: &Value, path: &mut ChangePath, out: &mut Vec<ChangeRecord>) {
    match (before, after) {
        (Value::Object(old), Value::Object(new)) => {
            for (key, old_child) in old {
                path.push(PathSegment::Key(key.clone()));
                match new.get(key) {
                    Some(new_child) => walk(old_child, new_child, path, out),
                    None => out.push(ChangeRecord::remove(path.clone(), old_child.clone())),
                }
                path.pop();
            }
            for (key, new_child) in new {
                if !old.contains_key(key) {
                    path.push(PathSegment::Key(key.clone()));
                    out.push(ChangeRecord::create(path.clone(), new_child.clone()));
                    path.pop();
                }
            }
        }
        (Value::Array(old), Value::Array(new)) => {
            for index in 0..old.len().max(new.len()) {
                path.push(PathSegment::Index(index));
                match (old.get(index), new.get(index)) {
                    (Some(o), Some(n)) => walk(o, n, path, out),
                    (Some(o), None) => out.push(ChangeRecord::remove(path.clone(), o.clone())),
                    (None, Some(n)) => out.push(ChangeRecord::create(path.clone(), n.clone())),
                    (None, None) => {}
                }
                path.pop();
            }
        }
        (old, new) if old != new => {
            out.push(ChangeRecord::change(path.clone(), old.clone(), new.clone()));
        }
        _ => {}
    }
}
