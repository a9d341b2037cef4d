use hot::{Document, Error};

fn main() -> Result<(), Error> {
    let mut document = Document::new();
    let body = document.body();

    let heading = document.create_element("h1");
    document.append_text(heading, "Fruit")?;
    document.append_child(body, heading)?;

    let list = document.create_element("ul");
    document.element_mut(list).unwrap().set_id("fruit");
    document.append_child(body, list)?;

    for (name, color) in [("apple", "green"), ("banana", "yellow"), ("cherry", "red")] {
        let item = document.create_element("li");
        let element = document.element_mut(item).unwrap();
        element.set_class_name("fruit");
        element.style_mut().set("color", color);
        document.append_text(item, name)?;
        document.append_child(list, item)?;
    }

    let picture = document.create_element("img");
    document
        .element_mut(picture)
        .unwrap()
        .set_attribute("src", "fruit.png");
    document.append_child(body, picture)?;

    println!("{}", document.to_string(document.root()));

    for node in document.query_selector_all(body, "li.fruit") {
        let element = document.element(node).unwrap();
        println!(
            "{}: {}",
            document.text_content(node),
            element.get_attribute("style").unwrap()
        );
    }

    Ok(())
}
