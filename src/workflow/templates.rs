/// Built-in workflow templates
///
/// Seeded once at process start and held read-only for the process lifetime.
/// Templates are returned verbatim by the load and list endpoints and are
/// never written to the mutable store.

use crate::workflow::types::{Connection, Node, Position, Template, WorkflowData};
use serde_json::{Map, Value};

fn props(entries: Vec<(&str, Value)>) -> Map<String, Value> {
    entries.into_iter().map(|(k, v)| (k.to_string(), v)).collect()
}

fn node(id: &str, node_type: &str, x: f64, y: f64, properties: Vec<(&str, Value)>) -> Node {
    Node {
        id: id.to_string(),
        node_type: node_type.to_string(),
        position: Position { x, y },
        properties: props(properties),
    }
}

fn connection(id: &str, from: &str, to: &str) -> Connection {
    Connection {
        id: id.to_string(),
        from: from.to_string(),
        to: to.to_string(),
    }
}

/// The fixed template set, in registry insertion order
pub fn builtin_templates() -> Vec<Template> {
    vec![
        Template {
            id: "template1".to_string(),
            name: "Simple API Workflow".to_string(),
            description: "Basic HTTP request and email notification".to_string(),
            workflow_data: WorkflowData {
                nodes: vec![
                    node("node1", "http_request", 100.0, 100.0, vec![
                        ("method", "GET".into()),
                        ("url", "https://jsonplaceholder.typicode.com/posts/1".into()),
                    ]),
                    node("node2", "email_send", 400.0, 100.0, vec![
                        ("to", "user@example.com".into()),
                        ("subject", "API Response".into()),
                    ]),
                ],
                connections: vec![connection("conn1", "node1", "node2")],
            },
        },
        Template {
            id: "template2".to_string(),
            name: "Data Processing Pipeline".to_string(),
            description: "Webhook trigger with data filtering and database storage".to_string(),
            workflow_data: WorkflowData {
                nodes: vec![
                    node("node1", "webhook", 100.0, 100.0, vec![("method", "POST".into())]),
                    node("node2", "data_filter", 300.0, 100.0, vec![
                        ("filter_condition", "status == 'active'".into()),
                    ]),
                    node("node3", "database_query", 500.0, 100.0, vec![
                        ("query", "INSERT INTO processed_data (data) VALUES (?)".into()),
                    ]),
                ],
                connections: vec![
                    connection("conn1", "node1", "node2"),
                    connection("conn2", "node2", "node3"),
                ],
            },
        },
        Template {
            id: "template3".to_string(),
            name: "File Processing Workflow".to_string(),
            description: "Process files with conditional logic and notifications".to_string(),
            workflow_data: WorkflowData {
                nodes: vec![
                    node("node1", "file_processor", 100.0, 100.0, vec![("operation", "read".into())]),
                    node("node2", "condition", 300.0, 100.0, vec![
                        ("condition", "file_size > 1000".into()),
                    ]),
                    node("node3", "email_send", 500.0, 50.0, vec![
                        ("subject", "Large file processed".into()),
                    ]),
                    node("node4", "delay", 500.0, 150.0, vec![("duration", 5.into())]),
                ],
                connections: vec![
                    connection("conn1", "node1", "node2"),
                    connection("conn2", "node2", "node3"),
                    connection("conn3", "node2", "node4"),
                ],
            },
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_seeds_three_templates_in_order() {
        let templates = builtin_templates();
        let ids: Vec<&str> = templates.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, ["template1", "template2", "template3"]);
    }

    #[test]
    fn template_one_shape_is_fixed() {
        let templates = builtin_templates();
        let t = &templates[0];
        assert_eq!(t.name, "Simple API Workflow");
        assert_eq!(t.workflow_data.nodes.len(), 2);
        assert_eq!(t.workflow_data.connections.len(), 1);
        assert_eq!(t.workflow_data.nodes[0].node_type, "http_request");
        assert_eq!(t.workflow_data.nodes[0].properties["method"], "GET");
    }

    #[test]
    fn branching_template_fans_out_from_condition() {
        let templates = builtin_templates();
        let t = &templates[2];
        let from_condition: Vec<&str> = t
            .workflow_data
            .connections
            .iter()
            .filter(|c| c.from == "node2")
            .map(|c| c.to.as_str())
            .collect();
        assert_eq!(from_condition, ["node3", "node4"]);
    }
}
