//! End-to-end pipeline: YAML input → synthesis → rendered Java

use std::rc::Rc;

use wiregen::{create_all, render, RenderConfig, SynthesisInput};

fn plain_config() -> RenderConfig {
    RenderConfig {
        provenance: false,
        ..RenderConfig::default()
    }
}

#[test]
fn root_builder_from_yaml_renders_java() {
    let yaml = r#"
components:
  - name: GeneratedShopComponent
    creator_name: Builder
    descriptor:
      type: com.example.ShopComponent
      root: true
      requirements:
        - kind: module
          type: com.example.CartModule
          null_policy: new
        - kind: dependency
          type: com.example.HttpClient
          null_policy: throw
    requirements:
      - kind: module
        type: com.example.CartModule
        null_policy: new
      - kind: dependency
        type: com.example.HttpClient
        null_policy: throw
"#;
    let input = SynthesisInput::from_yaml(yaml).unwrap();
    let outcomes = create_all(&input).unwrap();
    assert_eq!(outcomes.len(), 1);

    let creator = outcomes[0].creator.as_ref().unwrap();
    assert_eq!(creator.name(), "Builder");
    assert_eq!(creator.provided_requirements().len(), 2);

    let code = render(creator, &plain_config());
    assert!(code.contains("public static final class Builder"));
    assert!(code.contains("private Builder()"));
    assert!(code.contains("public Builder cartModule(com.example.CartModule cartModule)"));
    assert!(code.contains("public com.example.ShopComponent build()"));
    assert!(code.contains("if (this.cartModule == null)"));
    assert!(code.contains("return new GeneratedShopComponent(cartModule, httpClient);"));
}

#[test]
fn ahead_of_time_chain_from_yaml() {
    // Base abstract implementation, an intermediate abstract node, and the
    // concrete leaf, in generation order.
    let yaml = r#"
components:
  - name: AbstractOrderComponent
    creator_name: AbstractOrderBuilder
    is_abstract: true
    descriptor: &descriptor
      type: com.example.OrderComponent
      creator:
        type: com.example.OrderComponent.Builder
        interface: true
        factory_method: build
        setters:
          - requirement:
              kind: module
              type: com.example.OrderModule
              null_policy: throw
            method_name: orderModule
      requirements:
        - kind: module
          type: com.example.OrderModule
          null_policy: throw
      owned_modules:
        - com.example.OrderModule
    requirements:
      - kind: module
        type: com.example.OrderModule
        null_policy: throw

  - name: IntermediateOrderComponent
    creator_name: IntermediateOrderBuilder
    is_abstract: true
    descriptor: *descriptor
    requirements:
      - kind: module
        type: com.example.OrderModule
        null_policy: throw
    base:
      creator_name: AbstractOrderBuilder

  - name: FinalOrderComponent
    creator_name: FinalOrderBuilder
    descriptor: *descriptor
    requirements:
      - kind: module
        type: com.example.OrderModule
        null_policy: throw
    base:
      creator_name: AbstractOrderBuilder
"#;
    let input = SynthesisInput::from_yaml(yaml).unwrap();
    let outcomes = create_all(&input).unwrap();
    assert_eq!(outcomes.len(), 3);

    // Base: abstract creator, protected fields, setters, no factory method.
    let base = outcomes[0].creator.as_ref().unwrap();
    let base_decl = base.type_decl();
    assert!(base_decl.is_abstract);
    assert!(base_decl.method("orderModule").is_some());
    assert!(base_decl.method("build").is_none());
    let base_code = render(base, &plain_config());
    assert!(base_code.contains("public static abstract class AbstractOrderBuilder implements com.example.OrderComponent.Builder"));
    assert!(base_code.contains("protected com.example.OrderModule orderModule;"));

    // Intermediate: nothing generated.
    assert!(outcomes[1].creator.is_none());

    // Leaf: extends the base creator, reuses its fields, adds the factory.
    let leaf = outcomes[2].creator.as_ref().unwrap();
    assert!(Rc::ptr_eq(base.fields(), leaf.fields()));
    let leaf_decl = leaf.type_decl();
    assert!(leaf_decl.method("orderModule").is_none());
    assert!(leaf_decl.method("build").is_some());
    let leaf_code = render(leaf, &plain_config());
    assert!(leaf_code
        .contains("private static final class FinalOrderBuilder extends AbstractOrderBuilder"));
    assert!(!leaf_code.contains("protected com.example.OrderModule orderModule;"));
    assert!(leaf_code.contains("return new FinalOrderComponent(orderModule);"));
}

#[test]
fn subcomponent_without_contract_is_skipped() {
    let yaml = r#"
components:
  - name: GeneratedCheckoutComponent
    creator_name: Builder
    descriptor:
      type: com.example.CheckoutComponent
"#;
    let input = SynthesisInput::from_yaml(yaml).unwrap();
    let outcomes = create_all(&input).unwrap();
    assert!(outcomes[0].creator.is_none());
}

#[test]
fn input_round_trips_through_yaml() {
    let yaml = r#"
components:
  - name: GeneratedShopComponent
    creator_name: Builder
    descriptor:
      type: com.example.ShopComponent
      root: true
      requirements:
        - kind: module
          type: com.example.CartModule
          null_policy: new
"#;
    let input = SynthesisInput::from_yaml(yaml).unwrap();
    let reparsed = SynthesisInput::from_yaml(&input.to_yaml().unwrap()).unwrap();
    assert_eq!(reparsed.components.len(), input.components.len());
    assert_eq!(
        reparsed.components[0].descriptor.requirements,
        input.components[0].descriptor.requirements
    );
}

#[test]
fn json_outcome_summary_is_serializable() {
    let yaml = r#"
components:
  - name: GeneratedShopComponent
    creator_name: Builder
    descriptor:
      type: com.example.ShopComponent
      root: true
"#;
    let input = SynthesisInput::from_yaml(yaml).unwrap();
    let outcomes = create_all(&input).unwrap();
    let json = serde_json::to_string_pretty(&outcomes).unwrap();
    assert!(json.contains("\"component\": \"GeneratedShopComponent\""));
    assert!(json.contains("\"name\": \"Builder\""));
}
