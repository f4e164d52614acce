//! Static demo tables. The `*_count` values are authored alongside the
//! rows and intentionally left as written.

use super::aggregate::{Category, Lesson, Module, OfferType, SubCategory};
use crate::enums::{ContentSource, ContentType, PublishStatus};

fn offer_type(id: &str, name: &str, description: &str, count: u32, icon: &str, color: &str) -> OfferType {
    OfferType {
        id: id.into(),
        name: name.into(),
        description: description.into(),
        category_count: count,
        icon: icon.into(),
        color: color.into(),
    }
}

fn category(id: &str, offer_type_id: &str, name: &str, description: &str, count: u32) -> Category {
    Category {
        id: id.into(),
        offer_type_id: offer_type_id.into(),
        name: name.into(),
        description: description.into(),
        sub_category_count: count,
    }
}

fn sub_category(id: &str, category_id: &str, name: &str, description: &str, count: u32) -> SubCategory {
    SubCategory {
        id: id.into(),
        category_id: category_id.into(),
        name: name.into(),
        description: description.into(),
        module_count: count,
    }
}

fn module(id: &str, sub_category_id: &str, name: &str, description: &str, lessons: u32, order: u32) -> Module {
    Module {
        id: id.into(),
        sub_category_id: sub_category_id.into(),
        name: name.into(),
        description: description.into(),
        lesson_count: lessons,
        order,
    }
}

#[allow(clippy::too_many_arguments)]
fn lesson(
    id: &str,
    module_id: &str,
    title: &str,
    content_type: ContentType,
    duration: Option<&str>,
    order: u32,
    certificate_template_id: Option<&str>,
    source: ContentSource,
    status: PublishStatus,
) -> Lesson {
    Lesson {
        id: id.into(),
        module_id: module_id.into(),
        title: title.into(),
        content_type,
        duration: duration.map(Into::into),
        order,
        certificate_template_id: certificate_template_id.map(Into::into),
        source,
        status,
    }
}

pub fn offer_types() -> Vec<OfferType> {
    vec![
        offer_type("bt", "B.Tech", "Bachelor of Technology programs", 4, "graduation-cap", "accent--emerald"),
        offer_type("mt", "M.Tech", "Master of Technology programs", 3, "award", "accent--blue"),
        offer_type("cert", "Certifications", "Professional certification courses", 6, "badge-check", "accent--purple"),
        offer_type("diploma", "Diploma", "Diploma programs", 2, "file-text", "accent--amber"),
    ]
}

pub fn categories() -> Vec<Category> {
    vec![
        category("cs", "bt", "Computer Science", "CS & Engineering", 3),
        category("ec", "bt", "Electronics", "ECE Department", 2),
        category("me", "bt", "Mechanical", "Mechanical Engineering", 4),
        category("cv", "bt", "Civil", "Civil Engineering", 2),
        category("mt-cs", "mt", "Computer Science", "Advanced CS", 2),
        category("mt-ai", "mt", "AI & ML", "Artificial Intelligence", 3),
    ]
}

pub fn sub_categories() -> Vec<SubCategory> {
    vec![
        sub_category("ds", "cs", "Data Structures", "Fundamental data structures", 4),
        sub_category("algo", "cs", "Algorithms", "Algorithm design", 3),
        sub_category("dbms", "cs", "Database Management", "DBMS concepts", 5),
        sub_category("dig", "ec", "Digital Electronics", "Digital circuits", 3),
        sub_category("ana", "ec", "Analog Electronics", "Analog circuits", 2),
    ]
}

pub fn modules() -> Vec<Module> {
    vec![
        // Data Structures
        module("m1", "ds", "Arrays", "Array fundamentals", 4, 1),
        module("m2", "ds", "Linked Lists", "Linked list operations", 5, 2),
        module("m3", "ds", "Stacks & Queues", "Stack and queue structures", 3, 3),
        module("m4", "ds", "Trees", "Tree data structures", 6, 4),
        // Algorithms
        module("m5", "algo", "Sorting Algorithms", "Various sorting techniques", 5, 1),
        module("m6", "algo", "Searching Algorithms", "Binary search and more", 3, 2),
        module("m7", "algo", "Graph Algorithms", "BFS, DFS, Dijkstra", 6, 3),
        // DBMS
        module("m8", "dbms", "SQL Basics", "Introduction to SQL", 4, 1),
        module("m9", "dbms", "Normalization", "Database normalization forms", 3, 2),
        module("m10", "dbms", "Transactions", "ACID properties and transactions", 4, 3),
        module("m11", "dbms", "Indexing", "Database indexing techniques", 3, 4),
        module("m12", "dbms", "Query Optimization", "Optimizing SQL queries", 5, 5),
        // Digital Electronics
        module("m13", "dig", "Boolean Algebra", "Logic gates and Boolean expressions", 4, 1),
        module("m14", "dig", "Combinational Circuits", "Multiplexers, decoders, adders", 5, 2),
        module("m15", "dig", "Sequential Circuits", "Flip-flops and counters", 4, 3),
        // Analog Electronics
        module("m16", "ana", "Diode Circuits", "Diode applications and rectifiers", 3, 1),
        module("m17", "ana", "Amplifier Circuits", "BJT and FET amplifiers", 4, 2),
    ]
}

pub fn lessons() -> Vec<Lesson> {
    use ContentSource::{External, Upload};
    use ContentType::*;
    use PublishStatus::{Draft, Published};

    vec![
        lesson("l1", "m1", "Introduction to Arrays", Video, Some("15:30"), 1, Some("cert-1"), Upload, Published),
        lesson("l2", "m1", "Array Operations", Video, Some("22:15"), 2, None, External, Published),
        lesson("l3", "m1", "Array Practice Problems", Pdf, None, 3, None, Upload, Published),
        lesson("l4", "m1", "Arrays Quiz", Quiz, None, 4, Some("cert-2"), Upload, Draft),
        lesson("l5", "m2", "Singly Linked Lists", Video, Some("18:45"), 1, None, Upload, Published),
        lesson("l6", "m2", "Doubly Linked Lists", Video, Some("20:00"), 2, None, External, Draft),
        lesson("l7", "m2", "Circular Linked Lists", Text, None, 3, None, Upload, Published),
        lesson("l8", "m2", "Linked List Assessment", Assessment, None, 4, Some("cert-1"), Upload, Draft),
    ]
}
