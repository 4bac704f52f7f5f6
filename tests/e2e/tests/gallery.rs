use e2e::{browser::Browser, test_server::TestServer};

const SLIDES: &str = "#gallery-slider .slide";
const DOTS: &str = "#gallery-dots .dot";

#[tokio::test]
#[ignore = "needs a Chrome install and a built web bundle"]
async fn test_gallery_builds_slides_and_dots() {
    let server = TestServer::start()
        .await
        .expect("Failed to start test server");

    let browser = Browser::launch().expect("Failed to launch browser");
    let page = browser.new_page().expect("Failed to create page");
    page.goto(server.url()).expect("Failed to navigate");
    page.find_element("#gallery-slider").expect("slider should render");

    assert_eq!(page.count(SLIDES).unwrap(), 8);
    assert_eq!(page.count(DOTS).unwrap(), 8);
    assert_eq!(page.active_index(SLIDES, ".active").unwrap(), Some(0));
    assert_eq!(page.active_index(DOTS, ".active").unwrap(), Some(0));
}

#[tokio::test]
#[ignore = "needs a Chrome install and a built web bundle"]
async fn test_gallery_wraps_and_jumps() {
    let server = TestServer::start()
        .await
        .expect("Failed to start test server");

    let browser = Browser::launch().expect("Failed to launch browser");
    let page = browser.new_page().expect("Failed to create page");
    page.goto(server.url()).expect("Failed to navigate");
    page.wait_for_text("#language-trigger", "KR").expect("bootstrap");

    page.click(".gallery_nav.prev").expect("previous button");
    assert_eq!(page.active_index(SLIDES, ".active").unwrap(), Some(7));
    assert_eq!(page.active_index(DOTS, ".active").unwrap(), Some(7));

    page.click(".gallery_nav.next").expect("next button");
    assert_eq!(page.active_index(SLIDES, ".active").unwrap(), Some(0));

    page.click("#gallery-dots .dot:nth-child(3)").expect("third dot");
    assert_eq!(page.active_index(SLIDES, ".active").unwrap(), Some(2));
    assert_eq!(page.active_index(DOTS, ".active").unwrap(), Some(2));
}
