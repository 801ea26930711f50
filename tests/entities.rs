use assistant_v1::{
    testing::test_client, CreateEntityOptions, CreateSynonymOptions, CreateValueOptions,
    DeleteEntityOptions, DeleteSynonymOptions, DeleteValueOptions, EntityValue, GetEntityOptions,
    GetSynonymOptions, GetValueOptions, ListEntitiesOptions, ListMentionsOptions,
    ListSynonymsOptions, ListValuesOptions, UpdateEntityOptions, UpdateSynonymOptions,
    UpdateValueOptions, ValueType,
};
use serde_json::json;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn entities_and_mentions() {
    let server = MockServer::start().await;
    let client = test_client(&server.uri());

    Mock::given(method("POST"))
        .and(path("/v1/workspaces/ws-1/entities"))
        .and(body_json(json!({
            "entity": "size",
            "fuzzy_match": true,
            "values": [{ "value": "large", "type": "synonyms", "synonyms": ["big", "huge"] }]
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "entity": "size",
            "fuzzy_match": true
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/v1/workspaces/ws-1/entities"))
        .and(query_param("export", "true"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "entities": [{
                "entity": "size",
                "values": [
                    { "value": "large", "type": "synonyms", "synonyms": ["big"] },
                    { "value": "code", "type": "patterns", "patterns": ["[A-Z]{3}"] }
                ]
            }],
            "pagination": { "refresh_url": "/v1/workspaces/ws-1/entities?export=true" }
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/v1/workspaces/ws-1/entities/size"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "entity": "size",
            "description": "Pizza size"
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/v1/workspaces/ws-1/entities/size"))
        .and(body_json(json!({ "entity": "pizza_size", "fuzzy_match": false })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "entity": "pizza_size",
            "fuzzy_match": false
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/v1/workspaces/ws-1/entities/pizza_size/mentions"))
        .and(query_param("include_audit", "true"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "examples": [{ "text": "a large pizza", "intent": "order", "location": [2, 7] }],
            "pagination": { "refresh_url": "/v1/workspaces/ws-1/entities/pizza_size/mentions" }
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("DELETE"))
        .and(path("/v1/workspaces/ws-1/entities/pizza_size"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&server)
        .await;

    let entities = client.entities();

    let created = entities
        .create(
            &CreateEntityOptions::new("ws-1", "size")
                .with_fuzzy_match(true)
                .with_values(vec![EntityValue::synonyms("large", ["big", "huge"])]),
        )
        .await
        .expect("create entity");
    assert_eq!(created.status_code, 201);
    assert_eq!(created.result.fuzzy_match, Some(true));

    let list = entities
        .list(&ListEntitiesOptions::new("ws-1").with_export(true))
        .await
        .expect("list entities");
    let values = list.result.entities[0].values.clone().expect("values");
    assert_eq!(values[0].value_type, Some(ValueType::Synonyms));
    assert_eq!(values[1].patterns.as_deref(), Some(&["[A-Z]{3}".to_string()][..]));

    let fetched = entities
        .get(&GetEntityOptions::new("ws-1", "size"))
        .await
        .expect("get entity");
    assert_eq!(fetched.result.description.as_deref(), Some("Pizza size"));

    let renamed = entities
        .update(
            &UpdateEntityOptions::new("ws-1", "size")
                .with_new_entity("pizza_size")
                .with_new_fuzzy_match(false),
        )
        .await
        .expect("update entity");
    assert_eq!(renamed.result.entity, "pizza_size");

    let mentions = entities
        .mentions(&ListMentionsOptions::new("ws-1", "pizza_size").with_include_audit(true))
        .await
        .expect("list mentions");
    assert_eq!(mentions.result.examples[0].intent, "order");
    assert_eq!(mentions.result.examples[0].location, vec![2, 7]);

    entities
        .delete(&DeleteEntityOptions::new("ws-1", "pizza_size"))
        .await
        .expect("delete entity");
}

#[tokio::test]
async fn values_and_synonyms() {
    let server = MockServer::start().await;
    let client = test_client(&server.uri());
    let value_base = "/v1/workspaces/ws-1/entities/size/values";

    Mock::given(method("GET"))
        .and(path(value_base))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "values": [{ "value": "large", "type": "synonyms" }],
            "pagination": { "refresh_url": value_base }
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path(value_base))
        .and(body_json(json!({
            "value": "extra large",
            "type": "synonyms",
            "synonyms": ["xl"]
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "value": "extra large",
            "type": "synonyms",
            "synonyms": ["xl"]
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path(format!("{value_base}/extra%20large")))
        .and(query_param("export", "true"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "value": "extra large",
            "type": "synonyms",
            "synonyms": ["xl"]
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path(format!("{value_base}/extra%20large")))
        .and(query_param("append", "true"))
        .and(body_json(json!({ "synonyms": ["xxl"] })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "value": "extra large",
            "type": "synonyms",
            "synonyms": ["xl", "xxl"]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let synonym_base = format!("{value_base}/extra%20large/synonyms");

    Mock::given(method("GET"))
        .and(path(synonym_base.as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "synonyms": [{ "synonym": "xl" }, { "synonym": "xxl" }],
            "pagination": { "refresh_url": synonym_base }
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path(synonym_base.as_str()))
        .and(body_json(json!({ "synonym": "jumbo" })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({ "synonym": "jumbo" })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path(format!("{synonym_base}/jumbo")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "synonym": "jumbo" })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path(format!("{synonym_base}/jumbo")))
        .and(body_json(json!({ "synonym": "giant" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "synonym": "giant" })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("DELETE"))
        .and(path(format!("{synonym_base}/giant")))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("DELETE"))
        .and(path(format!("{value_base}/extra%20large")))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let values = client.values();
    let list = values
        .list(&ListValuesOptions::new("ws-1", "size"))
        .await
        .expect("list values");
    assert_eq!(list.result.values[0].value, "large");

    let created = values
        .create(
            &CreateValueOptions::new("ws-1", "size", "extra large")
                .with_synonyms(vec!["xl".to_string()]),
        )
        .await
        .expect("create value");
    assert_eq!(created.status_code, 201);

    values
        .get(&GetValueOptions::new("ws-1", "size", "extra large").with_export(true))
        .await
        .expect("get value");

    let updated = values
        .update(
            &UpdateValueOptions::new("ws-1", "size", "extra large")
                .with_new_synonyms(vec!["xxl".to_string()])
                .with_append(true),
        )
        .await
        .expect("update value");
    assert_eq!(
        updated.result.synonyms,
        Some(vec!["xl".to_string(), "xxl".to_string()])
    );

    let synonyms = client.synonyms();
    let listed = synonyms
        .list(&ListSynonymsOptions::new("ws-1", "size", "extra large"))
        .await
        .expect("list synonyms");
    assert_eq!(listed.result.synonyms.len(), 2);

    synonyms
        .create(&CreateSynonymOptions::new("ws-1", "size", "extra large", "jumbo"))
        .await
        .expect("create synonym");
    synonyms
        .get(&GetSynonymOptions::new("ws-1", "size", "extra large", "jumbo"))
        .await
        .expect("get synonym");
    let renamed = synonyms
        .update(
            &UpdateSynonymOptions::new("ws-1", "size", "extra large", "jumbo")
                .with_new_synonym("giant"),
        )
        .await
        .expect("update synonym");
    assert_eq!(renamed.result.synonym, "giant");
    synonyms
        .delete(&DeleteSynonymOptions::new("ws-1", "size", "extra large", "giant"))
        .await
        .expect("delete synonym");

    values
        .delete(&DeleteValueOptions::new("ws-1", "size", "extra large"))
        .await
        .expect("delete value");
}
