use factory_method_recipe::clients::client_code;
use factory_method_recipe::creators::{ConcreteCreator1, ConcreteCreator2};
use factory_method_recipe::framework::{Creator, Product};
use factory_method_recipe::lifecycle::run_demo;
use factory_method_recipe::products::{ConcreteProduct1, ConcreteProduct2};

/// Full end-to-end check of the demo transcript, byte for byte.
#[test]
fn demo_transcript_is_exact() {
    let mut out = Vec::new();
    run_demo(&mut out).expect("write to Vec cannot fail");
    let transcript = String::from_utf8(out).expect("transcript is UTF-8");

    let expected = "\
App: Launched with the ConcreteCreator1.
Client: I'm not aware of the creator's class, but it still works.
Creator: The same creator's code has just worked with {Result of the ConcreteProduct1}

App: Launched with the ConcreteCreator2.
Client: I'm not aware of the creator's class, but it still works.
Creator: The same creator's code has just worked with {Result of the ConcreteProduct2}";

    assert_eq!(transcript, expected);
}

/// Every creator variant's shared logic embeds its paired product's result.
#[test]
fn creators_embed_their_paired_product_result() {
    let pairs: [(&dyn Creator, &dyn Product); 2] = [
        (&ConcreteCreator1, &ConcreteProduct1),
        (&ConcreteCreator2, &ConcreteProduct2),
    ];

    for (creator, product) in pairs {
        let composed = creator.some_operation();
        let product_result = product.operation();
        assert!(
            composed.contains(&product_result),
            "expected {composed:?} to contain {product_result:?}"
        );
    }
}

/// The client routine accepts a creator variant defined entirely outside the
/// crate, proving the core is open for extension through the abstraction.
#[test]
fn client_accepts_foreign_creator_variants() {
    struct ForeignProduct;

    impl Product for ForeignProduct {
        fn operation(&self) -> String {
            "{Result of a foreign product}".to_string()
        }
    }

    struct ForeignCreator;

    impl Creator for ForeignCreator {
        fn factory_method(&self) -> Box<dyn Product> {
            Box::new(ForeignProduct)
        }
    }

    let mut out = Vec::new();
    client_code(&ForeignCreator, &mut out).unwrap();
    let output = String::from_utf8(out).unwrap();

    assert_eq!(
        output,
        "Client: I'm not aware of the creator's class, but it still works.\n\
         Creator: The same creator's code has just worked with {Result of a foreign product}"
    );
}

/// The non-product portion of the client output is identical across the two
/// shipped creators.
#[test]
fn client_output_differs_only_in_the_product_string() {
    let mut one = Vec::new();
    let mut two = Vec::new();
    client_code(&ConcreteCreator1, &mut one).unwrap();
    client_code(&ConcreteCreator2, &mut two).unwrap();

    let one = String::from_utf8(one).unwrap();
    let two = String::from_utf8(two).unwrap();

    let template_one = one
        .strip_suffix(&ConcreteProduct1.operation())
        .expect("output ends with the product result");
    let template_two = two
        .strip_suffix(&ConcreteProduct2.operation())
        .expect("output ends with the product result");

    assert_eq!(template_one, template_two);
}
